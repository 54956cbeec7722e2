//! The fixed Mergington High School catalog loaded at startup.

use clubhub_core::ActivityName;

use crate::activity::{Activity, Catalog};

/// Build the initial catalog, including the pre-seeded rosters.
pub fn seed_catalog() -> Catalog {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice drills and compete in inter-school basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["alex@mergington.edu"]),
        ),
        (
            "Soccer Club",
            Activity::new(
                "Train together and play matches in the regional league",
                "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
                22,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        (
            "Art Workshop",
            Activity::new(
                "Explore painting, drawing and sculpture with guest artists",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and stage school plays and performances",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(["mia@mergington.edu"]),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Fridays, 3:00 PM - 4:30 PM",
                16,
            )
            .with_participants(["noah@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build public speaking skills and argue current topics",
                "Tuesdays, 3:30 PM - 5:00 PM",
                14,
            )
            .with_participants(["isabella@mergington.edu"]),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (ActivityName::from(name), activity))
        .collect()
}
