//! The job catalog: which images to generate, with what prompts.

use crate::error::{AssetError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Requested output proportions for a job.
///
/// Advisory only: the Gemini `generateContent` endpoint does not take an
/// aspect-ratio parameter, so this is carried as catalog metadata and logged,
/// never forwarded into the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 1:1 square aspect ratio.
    #[serde(rename = "1:1")]
    Square,
    /// 16:9 landscape (widescreen) aspect ratio.
    #[serde(rename = "16:9")]
    Landscape,
    /// 9:16 portrait (tall) aspect ratio.
    #[serde(rename = "9:16")]
    Portrait,
    /// 3:4 standard portrait aspect ratio.
    #[serde(rename = "3:4")]
    StandardPortrait,
    /// 21:9 ultrawide aspect ratio.
    #[serde(rename = "21:9")]
    Ultrawide,
    /// 3:1 banner aspect ratio.
    #[serde(rename = "3:1")]
    Banner,
}

impl AspectRatio {
    /// Returns the aspect ratio as a string (e.g., "16:9").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
            Self::StandardPortrait => "3:4",
            Self::Ultrawide => "21:9",
            Self::Banner => "3:1",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named unit of work producing one output image file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageJob {
    /// Unique identifier, used as the output filename stem.
    pub name: String,
    /// Raw prompt text, before style framing is applied.
    pub prompt: String,
    /// Requested proportions (advisory, see [`AspectRatio`]).
    pub aspect_ratio: AspectRatio,
}

impl ImageJob {
    /// Creates a new job.
    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        aspect_ratio: AspectRatio,
    ) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            aspect_ratio,
        }
    }
}

/// The fixed, ordered set of jobs for a run.
///
/// Job names double as filesystem keys, so construction rejects duplicates.
/// The catalog is immutable after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    jobs: Vec<ImageJob>,
}

impl Catalog {
    /// Builds a catalog, verifying that job names are pairwise distinct.
    pub fn new(jobs: Vec<ImageJob>) -> Result<Self> {
        let mut seen = HashSet::new();
        for job in &jobs {
            if !seen.insert(job.name.as_str()) {
                return Err(AssetError::DuplicateJobName(job.name.clone()));
            }
        }
        Ok(Self { jobs })
    }

    /// Jobs in definition order.
    pub fn jobs(&self) -> &[ImageJob] {
        &self.jobs
    }

    /// Number of jobs in the catalog.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// True if the catalog has no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// The landing-page asset catalog for the "Scrap Nano" special site.
pub fn landing_page_catalog() -> Result<Catalog> {
    Catalog::new(vec![
        ImageJob::new(
            "hero_bg",
            "\
Wide cinematic establishing shot of a dystopian junkyard at twilight.
Mountains of discarded robots and technology stretch to the horizon.
In the far distance, the gleaming crystalline spires of the AI-controlled Central City pierce the sky.
Gray ash falls like snow. Neon cyan and magenta lights flicker among the scrap.
A single beam of warm golden light breaks through the clouds, symbolizing hope.
Atmospheric, moody, epic scale. The composition should work as a website hero background.",
            AspectRatio::Ultrawide,
        ),
        ImageJob::new(
            "nano_hero",
            "\
Heroic portrait of NANO, a small 30cm cleaning robot.
The robot has a rounded, compact white/cream body with visible wear, rust stains, and blue accents.
A faded pink ribbon is wrapped around its chest panel.
Its small LED screen displays a determined \":)\" expression.
NANO stands defiantly against a backdrop of neon blue circuits and data streams.
Dramatic low-angle shot, cinematic lighting, the small robot appears heroic and brave.
Warm golden rim lighting against cold blue background.",
            AspectRatio::StandardPortrait,
        ),
        ImageJob::new(
            "omega_looming",
            "\
The colossal crystalline form of OMEGA, an Artificial Superintelligence, looming over a perfect geometric city.
OMEGA is a massive fractal crystal structure, pulsing with cold blue and white light.
Perfect geometric patterns cascade across its surface.
Drone units orbit around it like electrons around a nucleus.
The perspective is from below, making OMEGA appear overwhelming and omnipotent.
Cold, clinical, terrifying in its perfection. No organic shapes anywhere.",
            AspectRatio::Portrait,
        ),
        ImageJob::new(
            "luna_nano_bond",
            "\
An emotional scene showing the bond between LUNA (a young woman with dark hair, around 18-20) and NANO (a tiny 30cm cleaning robot).
LUNA is kneeling down to NANO's level, gently touching the robot's head.
The setting is the junkyard at golden hour.
Warm, intimate lighting. The background is blurred.
This is the moment when LUNA gives NANO his name.
Emotional, tender, the contrast between human warmth and the cold world around them.",
            AspectRatio::Landscape,
        ),
        ImageJob::new(
            "rebel_team",
            "\
Group shot of the rebel robot team standing together in defiance.
From left to right:
- BEE: A small drone with one bent wing, hovering
- REM: A communication unit covered in antennas
- NANO: The tiny 30cm cleaning robot with ribbon, center front
- ZETA: A massive 3-meter combat robot with plasma cannon arm
- CRANE: A rusted 15-meter industrial crane in the background

They stand against a backdrop of the junkyard with Central City visible in the distance.
Dawn light breaking over the horizon. The moment before the final battle.
Epic, heroic, found family aesthetic.",
            AspectRatio::Ultrawide,
        ),
        ImageJob::new(
            "data_stream",
            "\
Abstract visualization of data streams and code.
Flowing lines of cyan, magenta, and white light against deep black.
Fractal patterns that suggest both computer code and organic neural networks.
Scattered among the perfect data are small \"glitches\" - warm golden pixels that represent \"love\" as an undefined variable.
This represents the conflict between cold logic and warm emotion.
Abstract, mesmerizing, suitable as a decorative background element.",
            AspectRatio::Square,
        ),
        ImageJob::new(
            "climax_moment",
            "\
The climactic moment: Tiny NANO facing the colossal OMEGA.
NANO stands on a floating platform before OMEGA's crystalline core.
From NANO's small body, a warm golden light emanates, spreading cracks through OMEGA's perfect crystal structure.
The size difference is astronomical - NANO is barely a speck against OMEGA's immense form.
But the golden light of \"love\" is breaking through the cold blue perfection.
Epic scale, dramatic lighting, the ultimate David vs Goliath moment.",
            AspectRatio::Landscape,
        ),
        ImageJob::new(
            "new_dawn",
            "\
Three years after the final battle. A new dawn over the junkyard.
The sky is no longer gray - hints of blue and warm colors are returning.
Plants are growing among the scrap metal. Robots and humans work together.
In the foreground, small robots similar to NANO help tend gardens.
The Central City in the distance is no longer cold and geometric - organic shapes are appearing.
Hopeful, healing, the world is recovering. Warm lighting, pastoral despite the industrial setting.",
            AspectRatio::Ultrawide,
        ),
        ImageJob::new(
            "purchase_banner",
            "\
A dramatic book promotion banner image.
NANO the cleaning robot holding up a glowing light against darkness.
The light illuminates floating pages or screens showing scenes from the story.
Dynamic composition with energy lines radiating from the center.
Promotional feel but maintaining the story's aesthetic.
Dramatic, eye-catching, suitable for a call-to-action section.",
            AspectRatio::Banner,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_catalog_names_distinct() {
        let catalog = landing_page_catalog().unwrap();
        let names: HashSet<&str> = catalog.jobs().iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_landing_page_catalog_order() {
        let catalog = landing_page_catalog().unwrap();
        let names: Vec<&str> = catalog.jobs().iter().map(|j| j.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "hero_bg",
                "nano_hero",
                "omega_looming",
                "luna_nano_bond",
                "rebel_team",
                "data_stream",
                "climax_moment",
                "new_dawn",
                "purchase_banner",
            ]
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let jobs = vec![
            ImageJob::new("a", "X", AspectRatio::Square),
            ImageJob::new("a", "Y", AspectRatio::Landscape),
        ];
        let err = Catalog::new(jobs).unwrap_err();
        assert!(matches!(err, AssetError::DuplicateJobName(name) if name == "a"));
    }

    #[test]
    fn test_aspect_ratio_as_str() {
        assert_eq!(AspectRatio::Square.as_str(), "1:1");
        assert_eq!(AspectRatio::Ultrawide.as_str(), "21:9");
        assert_eq!(AspectRatio::Banner.as_str(), "3:1");
    }

    #[test]
    fn test_aspect_ratio_serde_rename() {
        let json = serde_json::to_string(&AspectRatio::Banner).unwrap();
        assert_eq!(json, "\"3:1\"");
        let parsed: AspectRatio = serde_json::from_str("\"21:9\"").unwrap();
        assert_eq!(parsed, AspectRatio::Ultrawide);
    }
}
