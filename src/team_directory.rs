/// Static lookup from the feed's external team id to the local id that
/// names the team's logo asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamEntry {
    pub external_id: &'static str,
    pub local_id: &'static str,
}

const fn team(external_id: &'static str, local_id: &'static str) -> TeamEntry {
    TeamEntry { external_id, local_id }
}

pub static TEAMS: &[TeamEntry] = &[
    team("1", "hawks"),
    team("2", "celtics"),
    team("3", "pelicans"),
    team("4", "bulls"),
    team("5", "cavaliers"),
    team("6", "mavericks"),
    team("7", "nuggets"),
    team("8", "pistons"),
    team("9", "warriors"),
    team("10", "rockets"),
    team("11", "pacers"),
    team("12", "clippers"),
    team("13", "lakers"),
    team("14", "heat"),
    team("15", "bucks"),
    team("16", "timberwolves"),
    team("17", "nets"),
    team("18", "knicks"),
    team("19", "magic"),
    team("20", "sixers"),
    team("21", "suns"),
    team("22", "blazers"),
    team("23", "kings"),
    team("24", "spurs"),
    team("25", "thunder"),
    team("26", "jazz"),
    team("27", "wizards"),
    team("28", "raptors"),
    team("29", "grizzlies"),
    team("30", "hornets"),
];

/// First entry whose external id matches, `None` when the team is unknown
pub fn local_id_for(external_id: &str) -> Option<&'static str> {
    TEAMS
        .iter()
        .find(|entry| entry.external_id == external_id)
        .map(|entry| entry.local_id)
}

/// Logo path under `assets_dir`, `None` for teams outside the directory
pub fn logo_asset_path(assets_dir: &str, external_id: &str) -> Option<String> {
    local_id_for(external_id)
        .map(|local_id| format!("{}/{}.svg", assets_dir.trim_end_matches('/'), local_id))
}
