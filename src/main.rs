//! `viewport-samples [DEMO] [OPTIONS.toml]`
//!
//! Opens one of the sample viewports (`blank`, `triangle`, `index`, `grid`;
//! default `grid`), optionally configured from a TOML options file.

use std::path::PathBuf;

use viewport_samples::{
    dialog, error::ViewportError, options::Options, scene::Demo, Viewer,
};

/// Parsed command line.
struct Args {
    demo: Demo,
    options_path: Option<PathBuf>,
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<Args, ViewportError> {
    let demo = args.next().map_or(Ok(Demo::default()), |name| name.parse())?;
    let options_path = args.next().map(PathBuf::from);
    if let Some(extra) = args.next() {
        log::warn!("ignoring extra argument {extra:?}");
    }
    Ok(Args { demo, options_path })
}

fn run() -> Result<(), ViewportError> {
    let args = parse_args(std::env::args().skip(1))?;
    let options = match &args.options_path {
        Some(path) => {
            log::info!("loading options from {}", path.display());
            Options::load(path)?
        }
        None => Options::default(),
    };

    Viewer::builder()
        .with_demo(args.demo)
        .with_options(options)
        .build()
        .run()
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        dialog::show_startup_error("Critical error", &e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn no_arguments_opens_grid() {
        let parsed = parse_args(args(&[])).unwrap();
        assert_eq!(parsed.demo, Demo::Viewport3d);
        assert!(parsed.options_path.is_none());
    }

    #[test]
    fn demo_and_options_path() {
        let parsed = parse_args(args(&["triangle", "opts.toml"])).unwrap();
        assert_eq!(parsed.demo, Demo::Triangle);
        assert_eq!(parsed.options_path, Some(PathBuf::from("opts.toml")));
    }

    #[test]
    fn unknown_demo_is_an_error() {
        assert!(matches!(
            parse_args(args(&["teapot"])),
            Err(ViewportError::UnknownDemo(_))
        ));
    }
}
