pub mod dna;
pub mod engine;
pub mod ranking;
pub mod sankoff;
pub mod scoring;
pub mod segments;

/// dimensional analysis types
type Cost = f64;
type Count = u64;

/// trait for random generation, mainly (strictly?) for testing
pub trait Arbitrary {
    fn random() -> Self;
}

/// initialize terminal logging for driver binaries and examples.
/// the scoring core itself never logs; only the run engine does.
pub fn init() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
