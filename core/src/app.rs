//! Application related stuff

use clap::Parser;

lazy_static! {
    /// The global application options.
    pub static ref OPTIONS: Options = Options::parse();
}

/// System wide options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Acceleration structure used for ray queries.
    #[arg(
        long = "accel",
        short = 'a',
        value_name = "NAME",
        default_value = "bvh",
        help = "Acceleration structure to trace rays with (bvh|linear)."
    )]
    pub accelerator: String,

    /// Procedural scene to generate.
    #[arg(
        long = "scene",
        short = 's',
        value_name = "NAME",
        default_value = "grid",
        help = "Procedural scene to generate (grid|soup)."
    )]
    pub scene: String,

    /// Triangle count for the random soup scene.
    #[arg(
        long = "triangles",
        short = 'n',
        value_name = "NUM",
        default_value_t = 10000,
        help = "Number of triangles in the soup scene."
    )]
    pub triangles: usize,

    /// Number of camera rays along x.
    #[arg(long = "width", value_name = "NUM", default_value_t = 64, help = "Ray grid width.")]
    width: usize,

    /// Number of camera rays along y.
    #[arg(long = "height", value_name = "NUM", default_value_t = 64, help = "Ray grid height.")]
    height: usize,

    /// Seed for the random number generator.
    #[arg(long = "seed", value_name = "NUM", default_value_t = 0, help = "Seed for procedural scenes.")]
    pub seed: u64,

    /// Cross-check every query against the linear scan.
    #[arg(long = "verify", help = "Cross-check every BVH query against a brute-force scan.")]
    pub verify: bool,

    /// Suppress all text output other than error messages.
    #[arg(long, help = "Suppress all text output other than error messages.")]
    pub quiet: bool,
}

impl Options {
    /// Returns the ray grid resolution. Zero dimensions are raised to 1.
    pub fn resolution(&self) -> (usize, usize) {
        let clamp = |name: &str, n: usize| {
            if n == 0 {
                warn!("Invalid {name} 0, using 1");
                1
            } else {
                n
            }
        };
        (clamp("width", self.width), clamp("height", self.height))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::parse_from(["bvh-probe"]);
        assert_eq!(options.accelerator, "bvh");
        assert_eq!(options.scene, "grid");
        assert_eq!(options.triangles, 10000);
        assert_eq!(options.resolution(), (64, 64));
        assert_eq!(options.seed, 0);
        assert!(!options.verify);
        assert!(!options.quiet);
    }

    #[test]
    fn zero_resolution_is_clamped() {
        let options = Options::parse_from(["bvh-probe", "--width", "0", "--height", "3"]);
        assert_eq!(options.resolution(), (1, 3));
    }

    #[test]
    fn parse_all() {
        let options = Options::parse_from([
            "bvh-probe", "-a", "linear", "-s", "soup", "-n", "12", "--seed", "9", "--verify", "--quiet",
        ]);
        assert_eq!(options.accelerator, "linear");
        assert_eq!(options.scene, "soup");
        assert_eq!(options.triangles, 12);
        assert_eq!(options.seed, 9);
        assert!(options.verify);
        assert!(options.quiet);
    }
}
