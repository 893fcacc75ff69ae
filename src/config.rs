use std::path::PathBuf;
use anyhow::{ensure, Result};
use clap::Parser;
use crate::constants::*;
use crate::error::DeckError;

/// A 3D slide deck you move through by scrolling.
#[derive(Parser, Debug)]
#[command(name = "scroll-deck", version)]
pub struct Args {
    /// Directory of images to show, one slide per image, sorted by file name
    pub image_directory: Option<PathBuf>,

    /// Number of built-in slides when no image directory is given
    #[arg(short, long, default_value_t = DEFAULT_SLIDE_COUNT)]
    pub slides: usize,

    /// Initial window width in pixels
    #[arg(long, default_value_t = RENDER_WIDTH)]
    pub width: i32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = RENDER_HEIGHT)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlideSet {
    BuiltIn(usize),
    Images(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    pub slides: SlideSet,
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

impl TryFrom<Args> for DeckConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        ensure!(args.width > 0, "window width must be positive, got {}", args.width);
        if args.height <= 0 {
            return Err(DeckError::InvalidViewport(args.height as f32).into());
        }
        ensure!(args.fps > 0, "fps must be positive");

        let slides = match args.image_directory {
            Some(dir) => SlideSet::Images(dir),
            None if args.slides == 0 => return Err(DeckError::EmptyDeck.into()),
            None => SlideSet::BuiltIn(args.slides),
        };

        Ok(Self { slides, width: args.width, height: args.height, fps: args.fps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<DeckConfig> {
        let args = Args::try_parse_from(std::iter::once("scroll-deck").chain(argv.iter().copied()))?;
        DeckConfig::try_from(args)
    }

    #[test]
    fn defaults_to_five_built_in_slides() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.slides, SlideSet::BuiltIn(5));
        assert_eq!((config.width, config.height, config.fps), (RENDER_WIDTH, RENDER_HEIGHT, FPS));
    }

    #[test]
    fn image_directory_wins_over_slide_count() {
        let config = parse(&["photos", "--slides", "3"]).unwrap();
        assert_eq!(config.slides, SlideSet::Images(PathBuf::from("photos")));
    }

    #[test]
    fn window_size_is_configurable() {
        let config = parse(&["-s", "7", "--width", "1920", "--height", "1080", "--fps", "120"]).unwrap();
        assert_eq!(config.slides, SlideSet::BuiltIn(7));
        assert_eq!((config.width, config.height, config.fps), (1920, 1080, 120));
    }

    #[test]
    fn rejects_empty_deck() {
        let err = parse(&["--slides", "0"]).unwrap_err();
        assert_eq!(err.downcast_ref::<DeckError>(), Some(&DeckError::EmptyDeck));
    }

    #[test]
    fn rejects_degenerate_window() {
        let err = parse(&["--height", "0"]).unwrap_err();
        assert_eq!(err.downcast_ref::<DeckError>(), Some(&DeckError::InvalidViewport(0.0)));
        assert!(parse(&["--width", "-5"]).is_err());
        assert!(parse(&["--fps", "0"]).is_err());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(parse(&["--bogus"]).is_err());
    }
}
