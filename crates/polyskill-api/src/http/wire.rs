//! Dialog platform wire format.
//!
//! Deserializes the inbound webhook envelope into an [`Utterance`] and
//! serializes a [`Reply`] back into the response envelope. The session
//! block is echoed verbatim; the platform rejects responses whose
//! session does not match the request.
//!
//! Only the envelope fields the engine reads are modeled; everything
//! else in the request is ignored.

use serde::{Deserialize, Serialize};

use polyskill_types::reply::Reply;
use polyskill_types::utterance::{Entities, Utterance};

/// Inbound webhook envelope.
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    pub session: Session,
    pub request: RequestBody,
    pub version: String,
}

/// Session block, echoed back in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    #[serde(default)]
    pub message_id: u64,
    #[serde(default)]
    pub user_id: String,
    /// True on the first request of a conversation.
    #[serde(default, rename = "new")]
    pub is_new: bool,
}

#[derive(Debug, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub original_utterance: String,
    #[serde(default)]
    pub nlu: Nlu,
}

#[derive(Debug, Default, Deserialize)]
pub struct Nlu {
    #[serde(default)]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Geo entity components, most to least significant. The join order
/// matters: the geocoder query reads "country city street house".
const GEO_COMPONENTS: &[&str] = &["country", "city", "street", "house_number", "airport"];
const FIO_COMPONENTS: &[&str] = &["first_name", "patronymic_name", "last_name"];

impl WebhookRequest {
    /// Project the envelope onto the engine's input type.
    pub fn into_utterance(self) -> Utterance {
        let mut entities = Entities::default();
        for entity in self.request.nlu.entities {
            match entity.kind.as_str() {
                "YANDEX.GEO" => {
                    let parts = string_components(&entity.value, GEO_COMPONENTS);
                    if !parts.is_empty() {
                        entities.places.push(parts);
                    }
                }
                "YANDEX.FIO" => {
                    let parts = string_components(&entity.value, FIO_COMPONENTS);
                    if !parts.is_empty() {
                        entities.persons.push(parts.join(" "));
                    }
                }
                "YANDEX.NUMBER" => {
                    if let Some(number) = entity.value.as_f64() {
                        entities.numbers.push(number);
                    }
                }
                "YANDEX.DATETIME" => {
                    entities.datetimes.push(entity.value.to_string());
                }
                _ => {}
            }
        }

        Utterance::new(
            self.session.session_id,
            self.session.is_new,
            self.request.nlu.tokens,
            self.request.original_utterance,
            entities,
        )
    }
}

fn string_components(value: &serde_json::Value, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter_map(|key| value.get(key))
        .filter_map(|component| component.as_str())
        .map(str::to_string)
        .collect()
}

/// Outbound webhook envelope.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub response: ResponseBody,
    pub session: Session,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub text: String,
    pub end_session: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
}

#[derive(Debug, Serialize)]
pub struct Button {
    pub title: String,
    pub hide: bool,
}

#[derive(Debug, Serialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: &'static str,
    pub image_id: String,
    pub title: String,
}

impl WebhookResponse {
    pub fn from_reply(reply: Reply, session: Session, version: String) -> Self {
        let buttons = reply
            .suggestions
            .into_iter()
            .map(|s| Button {
                title: s.title,
                hide: s.hide,
            })
            .collect();
        let card = reply.image.map(|image| Card {
            card_type: "BigImage",
            image_id: image.image_id,
            title: image.title,
        });

        Self {
            response: ResponseBody {
                text: reply.text.unwrap_or_default(),
                end_session: reply.end_session,
                buttons,
                card,
            },
            session,
            version,
        }
    }
}
