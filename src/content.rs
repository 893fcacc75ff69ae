use std::path::PathBuf;
use raylib::prelude::Color;

/// A built-in slide: a vertical gradient with some text on it.
#[derive(Debug)]
pub struct Panel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub details: &'static [&'static str],
    pub top: Color,
    pub bottom: Color,
    pub text: Color,
    pub accent: Color,
}

const fn rgb(hex: u32) -> Color {
    Color {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
        a: 255,
    }
}

pub static PANELS: [Panel; 5] = [
    Panel {
        title: "Future Vision 3D",
        subtitle: "Experience the next dimension of digital innovation with immersive 3D presentations that captivate and engage",
        details: &["Start Journey", "Explore More"],
        top: rgb(0x581c87),
        bottom: rgb(0x312e81),
        text: rgb(0xffffff),
        accent: rgb(0xbfdbfe),
    },
    Panel {
        title: "Revolutionary Features",
        subtitle: "Hardware-accelerated 3D transformations for buttery smooth experiences",
        details: &["3D Performance", "Immersive Design", "Premium Experience"],
        top: rgb(0xf8fafc),
        bottom: rgb(0xeff6ff),
        text: rgb(0x1e293b),
        accent: rgb(0x2563eb),
    },
    Panel {
        title: "Our Services",
        subtitle: "We deliver cutting-edge 3D experiences that transform how users interact with digital content",
        details: &[
            "3D Web Development & Optimization",
            "Interactive Presentation Design",
            "Immersive User Interface Creation",
            "Performance & Accessibility Auditing",
        ],
        top: rgb(0x064e3b),
        bottom: rgb(0x134e4a),
        text: rgb(0xd1fae5),
        accent: rgb(0x6ee7b7),
    },
    Panel {
        title: "Success Stories",
        subtitle: "Immersive experiences that changed how people shop and learn",
        details: &["E-Commerce Revolution: 340% increase in conversions", "Educational Platform: 250% better engagement"],
        top: rgb(0xfff1f2),
        bottom: rgb(0xfff7ed),
        text: rgb(0x1e293b),
        accent: rgb(0x16a34a),
    },
    Panel {
        title: "Let's Create Together",
        subtitle: "Transform your digital presence with cutting-edge 3D experiences that captivate, convert, and create lasting impressions",
        details: &["hello@3dfuture.com", "+1 (555) 3D-FUTURE", "San Francisco, CA"],
        top: rgb(0x0f172a),
        bottom: rgb(0x1e293b),
        text: rgb(0xffffff),
        accent: rgb(0x60a5fa),
    },
];

/// What a slide shows.
#[derive(Debug)]
pub enum SlideSource {
    Panel(&'static Panel),
    Image(PathBuf),
}

/// `count` built-in panels, starting over once they run out.
pub fn default_deck(count: usize) -> Vec<SlideSource> {
    PANELS.iter().cycle().take(count).map(SlideSource::Panel).collect()
}

pub fn image_deck(paths: Vec<PathBuf>) -> Vec<SlideSource> {
    paths.into_iter().map(SlideSource::Image).collect()
}
