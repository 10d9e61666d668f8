// Purpose: PDG particle codes and trajectory id conventions used by the analysis
pub const ANTI_MUON: i32 = -13;
pub const MUON: i32 = 13;
pub const POSITRON: i32 = -11;
pub const ELECTRON: i32 = 11;
pub const CHARGED_PION: i32 = 211; // compared by absolute value
pub const NEUTRAL_PION: i32 = 111;
pub const PROTON: i32 = 2212;
pub const NEUTRON: i32 = 2112;
pub const GAMMA: i32 = 22;

// Returned by identity lookups when no trajectory matches
pub const UNRESOLVED: i32 = 0;

// Parent id carried by trajectories produced directly in the interaction
pub const PRIMARY_PARENT_ID: i32 = -1;

/// Human readable name of a PDG code, "unknown" for anything not listed here.
pub fn particle_name(pdg_code: i32) -> &'static str {
    match pdg_code {
        ANTI_MUON => "mu+",
        MUON => "mu-",
        POSITRON => "e+",
        ELECTRON => "e-",
        CHARGED_PION => "pi+",
        -211 => "pi-",
        NEUTRAL_PION => "pi0",
        PROTON => "proton",
        NEUTRON => "neutron",
        GAMMA => "gamma",
        _ => "unknown",
    }
}
