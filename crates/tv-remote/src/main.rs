use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    tv_remote::run(&mut out)
}
