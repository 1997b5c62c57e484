use std::{fs::read_to_string, path::Path};

use tempfile::tempdir;

use crate::{
    atom::Atom,
    elements::ElementMap,
    extract::{extract, CoordMode},
};

use super::*;

/// a finished water extraction rooted in `dir`, with distinct column
/// values so a column mixup shows up in the output
fn water(dir: &Path) -> Extraction {
    Extraction {
        path: dir.join("water.log"),
        label: "water".to_string(),
        charge: 0,
        multiplicity: 1,
        geom: Some(vec![
            Atom::new("O", "0.000000", "0.000000", "0.000000"),
            Atom::new("H", "0.000000", "0.000000", "0.960000"),
            Atom::new("H", "0.930000", "0.000000", "-0.240000"),
        ]),
    }
}

#[test]
fn xyz_output() {
    let dir = tempdir().unwrap();
    let res = water(dir.path());
    let path = Xyz.render(&res).unwrap().unwrap();
    assert_eq!(path, dir.path().join("water.xyz"));
    let got = read_to_string(path).unwrap();
    let want = concat!(
        "3\n",
        "Coordinates extracted from water\n",
        "O\t 0.000000\t 0.000000\t 0.000000\n",
        "H\t 0.000000\t 0.000000\t 0.960000\n",
        "H\t 0.930000\t 0.000000\t -0.240000\n",
    );
    assert_eq!(got, want);
}

#[test]
fn xyz_overwrites() {
    let dir = tempdir().unwrap();
    let mut res = water(dir.path());
    Xyz.render(&res).unwrap();
    res.geom = Some(vec![Atom::new("O", "1.000000", "1.000000", "1.000000")]);
    let path = Xyz.render(&res).unwrap().unwrap();
    let got = read_to_string(path).unwrap();
    // a rerun replaces the file instead of appending to it
    let want = concat!(
        "1\n",
        "Coordinates extracted from water\n",
        "O\t 1.000000\t 1.000000\t 1.000000\n",
    );
    assert_eq!(got, want);
}

#[test]
fn deck_header() {
    let dir = tempdir().unwrap();
    let got = Deck::default().header(&water(dir.path()));
    insta::assert_snapshot!(got, @r"
    %memory=12GB
    %nprocshared=8
    %chk=water.chk
    # pm6

    Title. From water

    0 1
    ");
}

#[test]
fn deck_output() {
    let dir = tempdir().unwrap();
    let mut res = water(dir.path());
    res.charge = -1;
    res.multiplicity = 2;
    let deck = Deck {
        params: DeckParams {
            mem: 64,
            proc: 16,
            method: "b3lyp/6-31g(d)".to_string(),
            title: "anion".to_string(),
        },
    };
    let path = deck.render(&res).unwrap().unwrap();
    assert_eq!(path, dir.path().join("water.gjf"));
    let got = read_to_string(path).unwrap();
    let want = concat!(
        "%memory=64GB\n",
        "%nprocshared=16\n",
        "%chk=water.chk\n",
        "# b3lyp/6-31g(d)\n",
        "\n",
        "anion. From water\n",
        "\n",
        "-1 2\n",
        "O\t 0.000000\t 0.000000\t 0.000000\n",
        "H\t 0.000000\t 0.000000\t 0.960000\n",
        "H\t 0.930000\t 0.000000\t -0.240000\n",
    );
    assert_eq!(got, want);
}

#[test]
fn si_appends() {
    let dir = tempdir().unwrap();
    let sup = SupInfo::new(dir.path());
    let res = water(dir.path());
    sup.render(&res).unwrap();
    let path = sup.render(&res).unwrap().unwrap();
    assert_eq!(path, dir.path().join(si::SI_FILE));
    let got = read_to_string(path).unwrap();
    let block = concat!(
        "3 \\\\\n",
        "System \\\\\n",
        "O ~ 0.000000 ~ 0.000000 ~ 0.000000 \\\\\n",
        "H ~ 0.000000 ~ 0.000000 ~ 0.960000 \\\\\n",
        "H ~ 0.930000 ~ 0.000000 ~ -0.240000 \\\\\n",
        "\\\\\n",
        "\n",
    );
    // the second run extends the file rather than starting it over
    assert_eq!(got, format!("{block}{block}"));
}

#[test]
fn skips_without_geometry() {
    let dir = tempdir().unwrap();
    let mut res = water(dir.path());
    res.geom = None;
    let deck = Deck::default();
    let sup = SupInfo::new(dir.path());
    let renderers: [&dyn Render; 3] = [&Xyz, &deck, &sup];
    for r in renderers {
        assert!(r.render(&res).unwrap().is_none());
    }
    // nothing may exist for a skipped extraction, not even the summary
    assert!(!dir.path().join("water.xyz").exists());
    assert!(!dir.path().join("water.gjf").exists());
    assert!(!sup.path.exists());
}

#[test]
fn full_pipeline() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("water.log");
    std::fs::copy("testfiles/water.log", &log).unwrap();
    let res = extract(&log, &ElementMap::default(), CoordMode::Shared).unwrap();
    let deck = Deck::default();
    let sup = SupInfo::new(dir.path());
    let renderers: [&dyn Render; 3] = [&Xyz, &deck, &sup];
    for r in renderers {
        assert!(r.render(&res).unwrap().is_some());
    }
    let got = read_to_string(dir.path().join("water.xyz")).unwrap();
    let want = concat!(
        "3\n",
        "Coordinates extracted from water\n",
        "O\t 0.000000\t 0.000000\t 0.000000\n",
        "H\t 0.000000\t 0.000000\t 0.000000\n",
        "H\t 0.930000\t 0.930000\t 0.930000\n",
    );
    assert_eq!(got, want);
    let gjf = read_to_string(dir.path().join("water.gjf")).unwrap();
    assert!(gjf.starts_with("%memory=12GB\n%nprocshared=8\n"));
    assert!(gjf.contains("\n0 1\nO\t 0.000000\t"));
    assert!(dir.path().join(si::SI_FILE).exists());
}
