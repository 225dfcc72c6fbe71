//! Structured-output schema describing one recommended place.

use serde_json::{Value, json};

/// Response schema sent with every recommendation request.
pub(super) fn place_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "id": {
                "type": "STRING",
                "description": "A unique identifier for the place, like 'kakao:12345'"
            },
            "name": { "type": "STRING", "description": "The name of the restaurant." },
            "category": {
                "type": "STRING",
                "description": "The main category of the food (e.g., Korean, Italian, Cafe)."
            },
            "phone": {
                "type": "STRING",
                "description": "The phone number of the restaurant, or null if not available."
            },
            "location": {
                "type": "OBJECT",
                "properties": {
                    "latitude": { "type": "NUMBER" },
                    "longitude": { "type": "NUMBER" }
                },
                "required": ["latitude", "longitude"]
            },
            "address": { "type": "STRING", "description": "The full address of the restaurant." },
            "distanceMeters": {
                "type": "NUMBER",
                "description": "The estimated distance in meters from the user."
            },
            "priceBand": {
                "type": "STRING",
                "description": "The price range: 'cheap', 'normal', 'expensive', or 'unknown'."
            },
            "rating": {
                "type": "NUMBER",
                "description": "The user rating, e.g., 4.5, or null if not available."
            },
            "reviewCount": {
                "type": "NUMBER",
                "description": "The number of reviews, or null if not available."
            },
            "photoUrl": {
                "type": "STRING",
                "description": "A URL for a placeholder image, like 'https://picsum.photos/800/600'."
            },
            "reason": {
                "type": "STRING",
                "description": "A short, enticing reason why this place was recommended for the user."
            }
        },
        "required": [
            "id", "name", "category", "location", "address",
            "distanceMeters", "priceBand", "reason"
        ]
    })
}
