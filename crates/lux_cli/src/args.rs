//! Command-line options.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const USAGE: &str = "usage: lux [OUTPUT] [--parallel] [--config FILE] [--size WxH]";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub output: PathBuf,
    pub parallel: bool,
    pub config: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from("basic.png"),
            parallel: false,
            config: None,
            width: 512,
            height: 512,
        }
    }
}

impl Options {
    /// Parse options from arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let mut output = None;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--parallel" | "-p" => options.parallel = true,
                "--config" | "-c" => {
                    let path = args.next().context("--config needs a file")?;
                    options.config = Some(PathBuf::from(path));
                }
                "--size" | "-s" => {
                    let size = args.next().context("--size needs WxH")?;
                    (options.width, options.height) = parse_size(&size)?;
                }
                "--help" | "-h" => bail!(USAGE),
                flag if flag.starts_with('-') => bail!("unknown option {flag}\n{USAGE}"),
                path => {
                    if output.replace(PathBuf::from(path)).is_some() {
                        bail!("more than one output path\n{USAGE}");
                    }
                }
            }
        }

        if let Some(output) = output {
            options.output = output;
        }
        Ok(options)
    }
}

fn parse_size(size: &str) -> Result<(u32, u32)> {
    let (w, h) = size
        .split_once(['x', 'X'])
        .with_context(|| format!("size {size:?} is not WxH"))?;
    let width = w.parse().with_context(|| format!("bad width {w:?}"))?;
    let height = h.parse().with_context(|| format!("bad height {h:?}"))?;
    if width == 0 || height == 0 {
        bail!("size {size:?} must be non-zero");
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::parse(Vec::<String>::new()).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.width, 512);
        assert!(!options.parallel);
    }

    #[test]
    fn test_parse_all_options() {
        let options =
            Options::parse(["out.png", "--parallel", "--config", "scene.json", "--size", "64x32"]).unwrap();
        assert_eq!(options.output, PathBuf::from("out.png"));
        assert!(options.parallel);
        assert_eq!(options.config, Some(PathBuf::from("scene.json")));
        assert_eq!((options.width, options.height), (64, 32));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Options::parse(["--size", "64"]).is_err());
        assert!(Options::parse(["--size", "0x8"]).is_err());
        assert!(Options::parse(["--config"]).is_err());
        assert!(Options::parse(["--bogus"]).is_err());
        assert!(Options::parse(["a.png", "b.png"]).is_err());
    }
}
