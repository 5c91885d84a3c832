//! Startup seeding of the campus dataset
//!
//! Loads the fixed set of five categories and eleven locations. Categories
//! are saved first so their datastore-assigned ids are available when the
//! locations referencing them are built. Any failure propagates out and is
//! fatal to startup; against an already seeded durable datastore the first
//! duplicate category name fails the whole routine.

use tracing::info;

use crate::database::{CategoryRepository, LocationRepository};
use crate::error::StoreError;
use crate::models::{Category, Location};

pub async fn load_sample_data(
    categories: &CategoryRepository,
    locations: &LocationRepository,
) -> Result<(), StoreError> {
    let academic = categories
        .save(&Category::new(
            "Academic Buildings",
            "Buildings for classes and lectures",
        ))
        .await?;
    let dining = categories
        .save(&Category::new("Dining", "Food and dining facilities"))
        .await?;
    let library = categories
        .save(&Category::new("Library", "Study and research facilities"))
        .await?;
    let sports = categories
        .save(&Category::new(
            "Sports & Recreation",
            "Athletic and recreation facilities",
        ))
        .await?;
    let residence = categories
        .save(&Category::new(
            "Residence Halls",
            "Student housing and dormitories",
        ))
        .await?;

    let fixtures = [
        Location::new(
            "Engineering Building",
            "Main building for engineering departments",
            academic.clone(),
            40.7128,
            -74.0060,
        ),
        Location::new(
            "Science Hall",
            "Chemistry, Physics, and Biology labs",
            academic.clone(),
            40.7130,
            -74.0058,
        ),
        Location::new(
            "Business School",
            "School of Business and Management",
            academic,
            40.7126,
            -74.0062,
        ),
        Location::new(
            "Main Cafeteria",
            "Large dining hall with multiple food stations",
            dining.clone(),
            40.7132,
            -74.0056,
        ),
        Location::new(
            "Student Union Cafe",
            "Coffee shop and light meals",
            dining,
            40.7129,
            -74.0059,
        ),
        Location::new(
            "Central Library",
            "Main campus library with extensive collection",
            library.clone(),
            40.7125,
            -74.0061,
        ),
        Location::new(
            "Science Library",
            "Specialized science and engineering resources",
            library,
            40.7131,
            -74.0057,
        ),
        Location::new(
            "Campus Recreation Center",
            "Gym, pool, and fitness facilities",
            sports.clone(),
            40.7134,
            -74.0055,
        ),
        Location::new(
            "Stadium",
            "Football and track stadium",
            sports,
            40.7135,
            -74.0054,
        ),
        Location::new(
            "North Hall",
            "Freshman dormitory",
            residence.clone(),
            40.7127,
            -74.0063,
        ),
        Location::new(
            "South Tower",
            "Upper-class student housing",
            residence,
            40.7124,
            -74.0064,
        ),
    ];

    for location in &fixtures {
        locations.save(location).await?;
    }

    info!("Seeded {} locations across 5 categories", fixtures.len());
    Ok(())
}
