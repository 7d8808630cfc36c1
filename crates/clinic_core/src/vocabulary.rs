//! Built-in discovery vocabulary: plausible spellings of ensemble names as they
//! appear in program file names.

pub const COMMON_ENSEMBLES: &[&str] = &[
    // Military bands
    "USAF",
    "USAFBand",
    "AirForce",
    "AirForceBand",
    "MarinesWest",
    "MarinesEast",
    "Marines",
    "MarineBand",
    "PresidentsOwn",
    "Presidents Own",
    "PresidentsOwnMarineBand",
    "ArmyFieldBand",
    "ArmyBand",
    "Army",
    "NavyBand",
    "Navy",
    "CoastGuard",
    "CoastGuardBand",
    // University programs
    "NorthTexas",
    "UNT",
    "UniversityNorthTexas",
    "Michigan",
    "UMich",
    "UniversityMichigan",
    "Illinois",
    "UIUC",
    "UniversityIllinois",
    "Northwestern",
    "NorthwesternUniversity",
    "Indiana",
    "IndianaUniversity",
    "Cincinnati",
    "UniversityCincinnati",
    "Kansas",
    "UniversityKansas",
    "Texas",
    "UniversityTexas",
    "UT",
    "FloridaState",
    "FSU",
    "Eastman",
    "EastmanWindEnsemble",
    "Ithaca",
    "IthacaCollege",
    "BostonUniversity",
    "BU",
    "Ohio",
    "OhioState",
    "OSU",
    "Wisconsin",
    "UniversityWisconsin",
    "Minnesota",
    "UniversityMinnesota",
    "Iowa",
    "UniversityIowa",
    "ColoradoState",
    "CSU",
    "SouthCarolina",
    "USC",
    "Arizona",
    "ArizonaState",
    "ASU",
    "WashingtonUniversity",
    // Professional ensembles
    "DallasWinds",
    "DallasWind",
    "USMarineBand",
    // High schools
    "Buchholz",
    "BuchholzHighSchool",
    "BrokenArrow",
    "BrokenArrowHighSchool",
    "ColonialForge",
    "Avon",
    "AvonHighSchool",
    "Vandegrift",
    "Hebron",
    "HebronHighSchool",
    "Marcus",
    "MarcusHighSchool",
    "RonaldReagan",
    "Claudia",
    "WilliamMason",
];

/// Owned copy of [`COMMON_ENSEMBLES`], for configuration defaults.
pub fn common_ensembles() -> Vec<String> {
    COMMON_ENSEMBLES.iter().map(|name| name.to_string()).collect()
}
