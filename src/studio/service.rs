/// One third-party text-to-video product whose prompt dialect this backend
/// knows how to produce. The set is fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetService {
    Veo3Studio,
    RunwayGen4,
    Kling,
    LumaDreamMachine,
    Pixverse,
    MidjourneyVideo,
}

impl TargetService {
    pub const ALL: [TargetService; 6] = [
        TargetService::Veo3Studio,
        TargetService::RunwayGen4,
        TargetService::Kling,
        TargetService::LumaDreamMachine,
        TargetService::Pixverse,
        TargetService::MidjourneyVideo,
    ];

    /// Resolve a wire identifier. Accepts both the display names the studio
    /// clients send ("Veo 3+ Studio") and the compact forms ("Veo3Studio").
    pub fn from_wire(name: &str) -> Option<Self> {
        match name.trim() {
            "Veo 3+ Studio" | "Veo3Studio" => Some(TargetService::Veo3Studio),
            "Runway Gen 4" | "RunwayGen4" => Some(TargetService::RunwayGen4),
            "Kling" => Some(TargetService::Kling),
            "Luma Dream Machine" | "LumaDreamMachine" => Some(TargetService::LumaDreamMachine),
            "Pixverse" => Some(TargetService::Pixverse),
            "Midjourney Video" | "MidjourneyVideo" => Some(TargetService::MidjourneyVideo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetService::Veo3Studio => "Veo 3+ Studio",
            TargetService::RunwayGen4 => "Runway Gen 4",
            TargetService::Kling => "Kling",
            TargetService::LumaDreamMachine => "Luma Dream Machine",
            TargetService::Pixverse => "Pixverse",
            TargetService::MidjourneyVideo => "Midjourney Video",
        }
    }
}

impl std::fmt::Display for TargetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
