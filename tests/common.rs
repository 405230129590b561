#![allow(dead_code)]

use serde_json::{Value, json};

use storefront::models::*;

pub const SEED_SLUG: &str = "ahmed";
pub const SEED_TOUR_ID: &str = "edge-of-the-world";

pub fn get_seed_guide_store_json() -> Value {
    json!({
        "success": true,
        "data": {
            "guide": {
                "fullName": "Ahmed Al-Harbi",
                "storeSlug": SEED_SLUG,
                "licenseNumber": "LIC-7781",
                "location": "Riyadh",
                "phone": "050 123 4567",
                "languages": ["Arabic, English"],
                "specialties": null
            },
            "store": {
                "storeName": "Desert Trails",
                "primaryColor": "#0f766e",
                "aboutText": "Small groups, big skies."
            }
        }
    })
}

pub fn get_seed_tours_json() -> Value {
    json!({
        "success": true,
        "data": {
            "tours": [
                {
                    "id": SEED_TOUR_ID,
                    "title": "Edge of the World",
                    "price": 350,
                    "currency": "SAR",
                    "maxGuests": 6,
                    "duration": 8,
                    "coverImage": "https://cdn.example.com/edge.jpg",
                    "itineraryDays": [
                        { "day": 1, "title": "Drive to the escarpment", "description": "Leave at dawn." }
                    ],
                    "includes": ["Transport", "Water"],
                    "excludes": null
                },
                {
                    "id": "old-town",
                    "title": "Old Town Walk",
                    "price": 120.5,
                    "currency": "SAR",
                    "maxGuests": 0,
                    "duration": 2.5
                }
            ]
        }
    })
}

pub fn get_seed_booking_request() -> BookingRequest {
    BookingRequest {
        full_name: "Omar Haddad".to_string(),
        email: "omar@example.com".to_string(),
        phone: "0501234567".to_string(),
        tour_date: "2099-01-01".to_string(),
        guests: 3,
        is_international_traveler: false,
        international: None,
        food_allergies: None,
        medical_conditions: Some("asthma".to_string()),
    }
}

pub fn get_seed_international_info() -> InternationalInfo {
    InternationalInfo {
        nationality: "German".to_string(),
        passport_number: "C01X00T47".to_string(),
        country_of_residence: "Germany".to_string(),
        emergency_contact_name: "Jonas Weber".to_string(),
        emergency_contact_phone: "+49 30 1234567".to_string(),
    }
}
