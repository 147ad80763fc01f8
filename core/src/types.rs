//! Domain DTOs for the placeholder API.
//!
//! # Design
//! Field names follow the remote's camelCase wire format. The types are
//! immutable snapshots: nothing here is cached or mutated after decoding.
//! The mock-server crate keeps its own copies; integration tests catch
//! schema drift between the two.

use serde::{Deserialize, Serialize};

/// A user as returned by `/users`. `id` is assigned by the server, so it is
/// optional on payloads we send.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates embedded in an address.
///
/// The API sends both values as JSON strings (`"-37.3159"`). Numbers are
/// accepted as well; output is always a string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Geo {
    #[serde(with = "float_string")]
    pub lat: f64,
    #[serde(with = "float_string")]
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

mod float_string {
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(value),
            Raw::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&text), &"a decimal coordinate")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRET: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn user_decodes_from_api_shape() {
        let user: User = serde_json::from_str(BRET).unwrap();
        assert_eq!(user.id, Some(1));
        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.geo.lat, -37.3159);
        assert_eq!(user.address.geo.lng, 81.1496);
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn user_serialization_is_stable() {
        let user: User = serde_json::from_str(BRET).unwrap();
        let first = serde_json::to_string(&user).unwrap();
        let again: User = serde_json::from_str(&first).unwrap();
        assert_eq!(serde_json::to_string(&again).unwrap(), first);
    }

    #[test]
    fn user_without_id_omits_it() {
        let mut user: User = serde_json::from_str(BRET).unwrap();
        user.id = None;
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["company"]["catchPhrase"], "Multi-layered client-server neural-net");
    }

    #[test]
    fn geo_accepts_numbers_and_emits_strings() {
        let geo: Geo = serde_json::from_str(r#"{"lat": -43.9509, "lng": "-34.4618"}"#).unwrap();
        assert_eq!(geo.lat, -43.9509);
        let json = serde_json::to_value(geo).unwrap();
        assert_eq!(json["lat"], "-43.9509");
        assert_eq!(json["lng"], "-34.4618");
    }

    #[test]
    fn geo_rejects_garbage() {
        let result: Result<Geo, _> = serde_json::from_str(r#"{"lat": "north", "lng": "0"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn todo_uses_camel_case() {
        let todo: Todo =
            serde_json::from_str(r#"{"userId":1,"id":2,"title":"quis ut nam","completed":true}"#).unwrap();
        assert_eq!(todo.user_id, 1);
        assert!(todo.completed);
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 1);
    }

    #[test]
    fn comment_decodes_post_id() {
        let comment: Comment = serde_json::from_str(
            r#"{"postId":7,"id":31,"name":"ut quas","email":"Emma@joanny.ca","body":"eos"}"#,
        )
        .unwrap();
        assert_eq!(comment.post_id, 7);
        assert_eq!(comment.id, 31);
    }
}
