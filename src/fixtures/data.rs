//! Seed catalog data.
//!
//! Fifty alcohols across three producers, including the canonical
//! "Jameson" whiskey record the API tests key on.

use crate::domain::AlcoholType;

/// Producer seed row
pub struct ProducerSeed {
    pub name: &'static str,
    pub country: &'static str,
}

/// Alcohol seed row; `image` names a label image created alongside it
pub struct AlcoholSeed {
    pub name: &'static str,
    pub kind: AlcoholType,
    pub description: Option<&'static str>,
    pub producer: &'static str,
    pub abv: f64,
    pub image: Option<&'static str>,
}

/// User seed row
pub struct UserSeed {
    pub email: &'static str,
    pub password: &'static str,
    pub role: &'static str,
}

pub const PRODUCERS: [ProducerSeed; 3] = [
    ProducerSeed {
        name: "Bacardi",
        country: "Cuba",
    },
    ProducerSeed {
        name: "Diageo",
        country: "United Kingdom",
    },
    ProducerSeed {
        name: "Pernod Ricard",
        country: "France",
    },
];

pub const USERS: [UserSeed; 1] = [UserSeed {
    email: "krum@codixis.com",
    password: "aBcd@5678yilnjvgtiuh",
    role: "admin",
}];

pub const ALCOHOLS: [AlcoholSeed; 50] = [
    // Vodka
    AlcoholSeed {
        name: "Smirnoff No. 21",
        kind: AlcoholType::Vodka,
        description: Some("Triple distilled grain vodka"),
        producer: "Diageo",
        abv: 37.5,
        image: Some("Smirnoff No. 21"),
    },
    AlcoholSeed {
        name: "Absolut",
        kind: AlcoholType::Vodka,
        description: Some("Swedish winter wheat vodka"),
        producer: "Pernod Ricard",
        abv: 40.0,
        image: Some("Absolut"),
    },
    AlcoholSeed {
        name: "Grey Goose",
        kind: AlcoholType::Vodka,
        description: Some("French wheat vodka from Picardy"),
        producer: "Bacardi",
        abv: 40.0,
        image: Some("Grey Goose"),
    },
    AlcoholSeed {
        name: "Ketel One",
        kind: AlcoholType::Vodka,
        description: None,
        producer: "Diageo",
        abv: 40.0,
        image: Some("Ketel One"),
    },
    AlcoholSeed {
        name: "Wyborowa",
        kind: AlcoholType::Vodka,
        description: Some("Polish rye vodka"),
        producer: "Pernod Ricard",
        abv: 37.5,
        image: None,
    },
    AlcoholSeed {
        name: "Eristoff",
        kind: AlcoholType::Vodka,
        description: None,
        producer: "Bacardi",
        abv: 37.5,
        image: None,
    },
    AlcoholSeed {
        name: "Flirt",
        kind: AlcoholType::Vodka,
        description: Some("Grain vodka bottled in Plovdiv"),
        producer: "Diageo",
        abv: 37.5,
        image: Some("Flirt"),
    },
    AlcoholSeed {
        name: "Savoy Silver",
        kind: AlcoholType::Vodka,
        description: Some("Bulgarian table vodka"),
        producer: "Pernod Ricard",
        abv: 37.5,
        image: Some("Savoy Silver"),
    },
    AlcoholSeed {
        name: "Finlandia",
        kind: AlcoholType::Vodka,
        description: Some("Barley vodka made with glacial water"),
        producer: "Bacardi",
        abv: 40.0,
        image: Some("Finlandia"),
    },
    AlcoholSeed {
        name: "Ciroc",
        kind: AlcoholType::Vodka,
        description: Some("Vodka distilled from French grapes"),
        producer: "Diageo",
        abv: 40.0,
        image: Some("Ciroc"),
    },
    // Beer
    AlcoholSeed {
        name: "Zagorka",
        kind: AlcoholType::Beer,
        description: Some("Pale lager brewed in Stara Zagora"),
        producer: "Diageo",
        abv: 5.0,
        image: Some("Zagorka"),
    },
    AlcoholSeed {
        name: "Kamenitza",
        kind: AlcoholType::Beer,
        description: Some("Lager brewed in Plovdiv since 1881"),
        producer: "Pernod Ricard",
        abv: 4.4,
        image: Some("Kamenitza"),
    },
    AlcoholSeed {
        name: "Shumensko",
        kind: AlcoholType::Beer,
        description: Some("Pilsner-style lager from Shumen"),
        producer: "Diageo",
        abv: 4.8,
        image: Some("Shumensko"),
    },
    AlcoholSeed {
        name: "Ariana",
        kind: AlcoholType::Beer,
        description: None,
        producer: "Bacardi",
        abv: 4.5,
        image: Some("Ariana"),
    },
    AlcoholSeed {
        name: "Pirinsko",
        kind: AlcoholType::Beer,
        description: Some("Light lager from Blagoevgrad"),
        producer: "Pernod Ricard",
        abv: 4.4,
        image: None,
    },
    AlcoholSeed {
        name: "Guinness",
        kind: AlcoholType::Beer,
        description: Some("Irish dry stout"),
        producer: "Diageo",
        abv: 4.2,
        image: Some("Guinness"),
    },
    AlcoholSeed {
        name: "Stella Artois",
        kind: AlcoholType::Beer,
        description: None,
        producer: "Pernod Ricard",
        abv: 5.0,
        image: Some("Stella Artois"),
    },
    AlcoholSeed {
        name: "Heineken",
        kind: AlcoholType::Beer,
        description: Some("Pale lager with a mild bitter taste"),
        producer: "Bacardi",
        abv: 5.0,
        image: Some("Heineken"),
    },
    AlcoholSeed {
        name: "Staropramen",
        kind: AlcoholType::Beer,
        description: Some("Czech premium lager"),
        producer: "Diageo",
        abv: 5.0,
        image: Some("Staropramen"),
    },
    AlcoholSeed {
        name: "Carlsberg",
        kind: AlcoholType::Beer,
        description: None,
        producer: "Bacardi",
        abv: 5.0,
        image: None,
    },
    // Whiskey
    AlcoholSeed {
        name: "Jameson",
        kind: AlcoholType::Whiskey,
        description: Some("Tennessee whiskey"),
        producer: "Bacardi",
        abv: 37.5,
        image: Some("Jameson"),
    },
    AlcoholSeed {
        name: "Jack Daniel's",
        kind: AlcoholType::Whiskey,
        description: Some("Charcoal mellowed sour mash"),
        producer: "Diageo",
        abv: 40.0,
        image: Some("Jack Daniel's"),
    },
    AlcoholSeed {
        name: "Johnnie Walker Black",
        kind: AlcoholType::Whiskey,
        description: Some("Blended Scotch aged 12 years"),
        producer: "Diageo",
        abv: 40.0,
        image: Some("Johnnie Walker Black"),
    },
    AlcoholSeed {
        name: "Bushmills",
        kind: AlcoholType::Whiskey,
        description: Some("Triple distilled Irish whiskey"),
        producer: "Pernod Ricard",
        abv: 40.0,
        image: Some("Bushmills"),
    },
    AlcoholSeed {
        name: "Glenfiddich 12",
        kind: AlcoholType::Whiskey,
        description: Some("Speyside single malt"),
        producer: "Pernod Ricard",
        abv: 40.0,
        image: Some("Glenfiddich 12"),
    },
    AlcoholSeed {
        name: "Chivas Regal",
        kind: AlcoholType::Whiskey,
        description: Some("Blended Scotch from Strathisla"),
        producer: "Pernod Ricard",
        abv: 40.0,
        image: Some("Chivas Regal"),
    },
    AlcoholSeed {
        name: "Tullamore Dew",
        kind: AlcoholType::Whiskey,
        description: None,
        producer: "Diageo",
        abv: 40.0,
        image: Some("Tullamore Dew"),
    },
    AlcoholSeed {
        name: "Maker's Mark",
        kind: AlcoholType::Whiskey,
        description: Some("Kentucky straight bourbon"),
        producer: "Bacardi",
        abv: 45.0,
        image: None,
    },
    AlcoholSeed {
        name: "Ballantine's",
        kind: AlcoholType::Whiskey,
        description: None,
        producer: "Pernod Ricard",
        abv: 40.0,
        image: None,
    },
    AlcoholSeed {
        name: "Grant's",
        kind: AlcoholType::Whiskey,
        description: Some("Family-owned blended Scotch"),
        producer: "Diageo",
        abv: 40.0,
        image: Some("Grant's"),
    },
    // Wine
    AlcoholSeed {
        name: "Mavrud Reserve",
        kind: AlcoholType::Wine,
        description: Some("Dark red from the Thracian Valley"),
        producer: "Pernod Ricard",
        abv: 14.0,
        image: Some("Mavrud Reserve"),
    },
    AlcoholSeed {
        name: "Melnik 55",
        kind: AlcoholType::Wine,
        description: Some("Broad-leaved Melnik, early ripening"),
        producer: "Bacardi",
        abv: 13.5,
        image: Some("Melnik 55"),
    },
    AlcoholSeed {
        name: "Santa Sarah Privat",
        kind: AlcoholType::Wine,
        description: Some("Limited release red blend"),
        producer: "Diageo",
        abv: 14.5,
        image: Some("Santa Sarah Privat"),
    },
    AlcoholSeed {
        name: "Khan Krum Chardonnay",
        kind: AlcoholType::Wine,
        description: Some("Barrel fermented white"),
        producer: "Pernod Ricard",
        abv: 12.5,
        image: Some("Khan Krum Chardonnay"),
    },
    AlcoholSeed {
        name: "Tcherga Red",
        kind: AlcoholType::Wine,
        description: None,
        producer: "Bacardi",
        abv: 13.0,
        image: Some("Tcherga Red"),
    },
    AlcoholSeed {
        name: "Enira",
        kind: AlcoholType::Wine,
        description: Some("Bessa Valley flagship blend"),
        producer: "Diageo",
        abv: 14.0,
        image: None,
    },
    AlcoholSeed {
        name: "Katarzyna Encore",
        kind: AlcoholType::Wine,
        description: Some("Syrah from the Sakar foothills"),
        producer: "Pernod Ricard",
        abv: 14.5,
        image: Some("Katarzyna Encore"),
    },
    AlcoholSeed {
        name: "Villa Yambol Cabernet",
        kind: AlcoholType::Wine,
        description: None,
        producer: "Bacardi",
        abv: 13.0,
        image: None,
    },
    AlcoholSeed {
        name: "Targovishte Muscat",
        kind: AlcoholType::Wine,
        description: Some("Aromatic off-dry white"),
        producer: "Diageo",
        abv: 11.5,
        image: Some("Targovishte Muscat"),
    },
    AlcoholSeed {
        name: "Burgozone Viognier",
        kind: AlcoholType::Wine,
        description: Some("Danube plain single vineyard"),
        producer: "Pernod Ricard",
        abv: 13.0,
        image: Some("Burgozone Viognier"),
    },
    // Rum
    AlcoholSeed {
        name: "Bacardi Carta Blanca",
        kind: AlcoholType::Rum,
        description: Some("White rum aged in oak"),
        producer: "Bacardi",
        abv: 37.5,
        image: Some("Bacardi Carta Blanca"),
    },
    AlcoholSeed {
        name: "Captain Morgan Spiced",
        kind: AlcoholType::Rum,
        description: Some("Caribbean rum with spice and vanilla"),
        producer: "Diageo",
        abv: 35.0,
        image: Some("Captain Morgan Spiced"),
    },
    AlcoholSeed {
        name: "Havana Club 7",
        kind: AlcoholType::Rum,
        description: Some("Cuban dark rum aged 7 years"),
        producer: "Pernod Ricard",
        abv: 40.0,
        image: Some("Havana Club 7"),
    },
    AlcoholSeed {
        name: "Zacapa 23",
        kind: AlcoholType::Rum,
        description: Some("Solera aged Guatemalan rum"),
        producer: "Diageo",
        abv: 40.0,
        image: Some("Zacapa 23"),
    },
    AlcoholSeed {
        name: "Diplomatico Reserva",
        kind: AlcoholType::Rum,
        description: None,
        producer: "Bacardi",
        abv: 40.0,
        image: Some("Diplomatico Reserva"),
    },
    AlcoholSeed {
        name: "Kraken Black Spiced",
        kind: AlcoholType::Rum,
        description: Some("Dark spiced rum"),
        producer: "Diageo",
        abv: 40.0,
        image: None,
    },
    AlcoholSeed {
        name: "Appleton Estate",
        kind: AlcoholType::Rum,
        description: Some("Jamaican estate rum"),
        producer: "Pernod Ricard",
        abv: 40.0,
        image: Some("Appleton Estate"),
    },
    AlcoholSeed {
        name: "Mount Gay Eclipse",
        kind: AlcoholType::Rum,
        description: None,
        producer: "Bacardi",
        abv: 40.0,
        image: None,
    },
    AlcoholSeed {
        name: "Brugal Anejo",
        kind: AlcoholType::Rum,
        description: None,
        producer: "Pernod Ricard",
        abv: 38.0,
        image: Some("Brugal Anejo"),
    },
    AlcoholSeed {
        name: "Bumbu",
        kind: AlcoholType::Rum,
        description: Some("Barbados craft rum"),
        producer: "Bacardi",
        abv: 35.0,
        image: Some("Bumbu"),
    },
];

/// Derive a CDN path slug from a display name
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Image URL for a seed image name
pub fn image_url(name: &str) -> String {
    format!("https://cdn.cellar.dev/images/{}.png", slug(name))
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    #[test]
    fn catalog_holds_ten_of_each_type() {
        let mut counts: HashMap<AlcoholType, usize> = HashMap::new();
        for seed in &ALCOHOLS {
            *counts.entry(seed.kind).or_default() += 1;
        }

        assert_eq!(ALCOHOLS.len(), 50);
        for kind in AlcoholType::ALL {
            assert_eq!(counts[&kind], 10, "unbalanced type {kind}");
        }
    }

    #[test]
    fn jameson_is_the_single_canonical_whiskey() {
        let matches: Vec<_> = ALCOHOLS
            .iter()
            .filter(|seed| seed.name.to_lowercase().contains("jameson"))
            .collect();

        assert_eq!(matches.len(), 1);
        let jameson = matches[0];
        assert_eq!(jameson.kind, AlcoholType::Whiskey);
        assert_eq!(jameson.description, Some("Tennessee whiskey"));
        assert_eq!(jameson.producer, "Bacardi");
        assert_eq!(jameson.abv, 37.5);
        assert_eq!(jameson.image, Some("Jameson"));
    }

    #[test]
    fn every_producer_reference_resolves() {
        let producers: HashSet<&str> = PRODUCERS.iter().map(|p| p.name).collect();
        for seed in &ALCOHOLS {
            assert!(
                producers.contains(seed.producer),
                "{} references unknown producer {}",
                seed.name,
                seed.producer
            );
        }
    }

    #[test]
    fn image_names_are_distinct() {
        let mut seen = HashSet::new();
        for name in ALCOHOLS.iter().filter_map(|seed| seed.image) {
            assert!(seen.insert(name), "duplicate image name {name}");
        }
    }

    #[test]
    fn slug_flattens_punctuation() {
        assert_eq!(slug("Jameson"), "jameson");
        assert_eq!(slug("Jack Daniel's"), "jack-daniel-s");
        assert_eq!(slug("Smirnoff No. 21"), "smirnoff-no-21");
        assert_eq!(
            image_url("Johnnie Walker Black"),
            "https://cdn.cellar.dev/images/johnnie-walker-black.png"
        );
    }
}
