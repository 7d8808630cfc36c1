//! Commentary pools for the lively console styles.

pub const STARTUP: &[&str] = &[
    "CONCERT PROGRAM HARVESTER\nWarming up the PDF vacuum...",
    "CONCERT PROGRAM HARVESTER\nAll music stands cleared. Let's collect some repertoire!",
    "CONCERT PROGRAM HARVESTER\nTuning to A=440 and pointing at the archive...",
];

pub const CHAOS_STARTUP: &[&str] = &[
    "!!! CONCERT PROGRAM HARVESTER: FULL VOLUME !!!\nNOBODY TOLD US TO PLAY QUIETLY!",
    "!!! FORTISSISSIMO MODE !!!\nEVERY PDF. EVERY YEAR. RIGHT NOW.",
];

pub const BORING_STARTUP: &str = "Concert program scraper\nInitializing...";

pub const SUCCESS: &[&str] = &[
    "Another program for the shelf!",
    "Got it. Straight into the archive.",
    "Program secured. Somebody played Holst, guaranteed.",
    "That one downloaded faster than a tempo marking change.",
    "Filed and labeled. The librarian would be proud.",
];

pub const CHAOS_SUCCESS: &[&str] = &[
    "GOT IT!!! THE ARCHIVE GROWS!!!",
    "DOWNLOADED!!! CUE THE CYMBAL CRASH!!!",
    "ANOTHER ONE!!! NOTHING CAN STOP US!!!",
];

pub const DUPLICATE: &[&str] = &[
    "Already on disk. We don't collect doubles.",
    "Seen it, saved it, skipping it.",
    "This one has been sitting here the whole time.",
    "Nice try. We already have this program.",
];

pub const CHAOS_DUPLICATE: &[&str] = &[
    "WE ALREADY HAVE THIS ONE!!! PAY ATTENTION!!!",
    "DUPLICATE DETECTED!!! SKIPPING WITH PREJUDICE!!!",
];

pub const NOT_FOUND: &[&str] = &[
    "404. That ensemble didn't leave a program here. Check the spelling?",
    "Nothing at that address. Maybe they went by a different name that year.",
    "Not found. Either it never existed or it's hiding in another year.",
    "A swing and a miss.",
];

pub const CONNECTION: &[&str] = &[
    "The server didn't answer. We'll live.",
    "Network trouble. Moving on to the next one.",
    "Couldn't reach the server this time around.",
];

pub const CHAOS_FAILURE: &[&str] = &[
    "NOOOOO!!! THE PROGRAM HAS ESCAPED!!!",
    "THE SERVER BETRAYED US!!!",
    "FAILURE!!! ONWARD ANYWAY!!!",
];

pub const RATE_LIMIT: &[&str] = &[
    "Pausing, like a polite scraper...",
    "Taking a breath between requests...",
    "Counting a bar of rest...",
    "Fermata. Waiting for the conductor...",
];

pub const PROGRESS_ASIDES: &[&str] = &[
    "The collection keeps growing.",
    "Place your bets on how many have a Grainger piece.",
    "Somewhere a band director is nodding approvingly.",
];

pub const EASTER_EGGS: &[(&str, &str)] = &[
    ("USAF", "The Air Force band. Expect something spicy."),
    ("Marines", "The Marines! Precision in every measure."),
    ("PresidentsOwn", "The President's Own. Formal attire required."),
    ("ArmyFieldBand", "Army Field Band: dynamics for days."),
    ("DallasWinds", "Professional winds. The big leagues."),
    ("NorthTexas", "North Texas, where future directors are forged."),
    ("Michigan", "Michigan! Maize, blue and double reeds."),
    ("Illinois", "Illinois! Big Ten, big sound."),
];

pub const DISCOVERY_START: &[&str] = &[
    "DISCOVERY MODE\nChecking which ensembles left a program this year...",
    "DISCOVERY MODE\nKnocking on every door in the name list...",
];

pub const DISCOVERY_HIT: &[&str] = &[
    "found one!",
    "exists!",
    "jackpot!",
];

pub const DISCOVERY_NONE: &[&str] = &[
    "No ensembles matched the common name patterns for this year.\nThe archive may use different spellings; check it by hand.",
    "Zero results. This year's names must be unusual.",
];

pub const SUMMARY_HEADER: &[&str] = &["THE FINAL TALLY", "DAMAGE REPORT", "CONCERT'S OVER"];

pub const SUMMARY_OUTRO: &[&str] = &[
    "Now go read them. Or at least the first two pages.",
    "Your hard drive is a little fuller and a lot more musical.",
    "Time to analyze some repertoire choices!",
];

/// Lookup by case-insensitive substring, so `MarinesWest` matches `Marines`.
pub fn easter_egg(ensemble: &str) -> Option<&'static str> {
    let lowered = ensemble.to_lowercase();
    EASTER_EGGS
        .iter()
        .find(|(key, _)| lowered.contains(&key.to_lowercase()))
        .map(|(_, line)| *line)
}

/// Deterministic picker: walks each pool in order, wrapping around.
#[derive(Debug, Default, Clone)]
pub struct Rotation {
    step: usize,
}

impl Rotation {
    pub fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        if pool.is_empty() {
            return "";
        }
        let line = pool[self.step % pool.len()];
        self.step += 1;
        line
    }
}
