#![allow(dead_code)]

use std::sync::Arc;

use matryoshka::entities::Pipe;

/// (code, sdr, pn, outer, inner, kg/m)
const CATALOG: [(&str, u32, &str, f64, f64, f64); 10] = [
    ("TPE800/PN6", 26, "PN6", 800.0, 738.8, 75.19),
    ("TPE800/PN16", 11, "PN16", 800.0, 654.6, 168.7),
    ("TPE630/PN6", 26, "PN6", 630.0, 581.8, 46.64),
    ("TPE500/PN6", 26, "PN6", 500.0, 461.8, 29.05),
    ("TPE400/PN6", 26, "PN6", 400.0, 369.4, 18.80),
    ("TPE315/PN6", 26, "PN6", 315.0, 290.8, 11.71),
    ("TPE250/PN6", 26, "PN6", 250.0, 230.8, 7.36),
    ("TPE200/PN6", 26, "PN6", 200.0, 184.6, 4.65),
    ("TPE160/PN6", 26, "PN6", 160.0, 147.6, 2.98),
    ("TPE110/PN6", 26, "PN6", 110.0, 101.6, 1.42),
];

pub fn pipe(code: &str) -> Arc<Pipe> {
    let (code, sdr, pn, outer, inner, wpm) = CATALOG
        .iter()
        .find(|c| c.0 == code)
        .copied()
        .unwrap_or_else(|| panic!("unknown pipe code: {code}"));
    Arc::new(Pipe {
        code: code.to_string(),
        sdr,
        pressure_class: pn.to_string(),
        outer_diameter: outer,
        inner_diameter: inner,
        wall_thickness: None,
        weight_per_meter: wpm,
    })
}

pub fn pipes(codes_and_qty: &[(&str, usize)]) -> Vec<Arc<Pipe>> {
    codes_and_qty
        .iter()
        .flat_map(|(code, qty)| std::iter::repeat_n(pipe(code), *qty))
        .collect()
}

/// One pipe of every PN6 size from DN800 down to DN110
pub fn telescoping_set() -> Vec<Arc<Pipe>> {
    [
        "TPE110/PN6",
        "TPE400/PN6",
        "TPE800/PN6",
        "TPE200/PN6",
        "TPE630/PN6",
        "TPE315/PN6",
        "TPE500/PN6",
    ]
    .iter()
    .map(|c| pipe(c))
    .collect()
}

pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
