// Wire protocol for commands: `{"type": ..., "content": ..., "sender": ...}`.
// The payload shape depends on `type`; mismatches are rejected here, before
// anything reaches the world.

use crate::domain::{CommandError, Vector2D};
use crate::use_cases::{Command, Envelope};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw command message as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub content: Value,
    #[serde(default)]
    pub sender: u64,
}

/// Payload for `move_player`: an acceleration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovePlayerPayload {
    pub player_id: u64,
    pub x: f64,
    pub y: f64,
}

/// Payload for `move_enemy`: an absolute position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveEnemyPayload {
    pub enemy_id: u64,
    pub x: f64,
    pub y: f64,
}

/// Payload for `damage_player` and `damage_enemy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DamagePayload {
    pub id: u64,
    pub amount: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScorePayload {
    pub player_id: u64,
    pub points: i32,
}

fn payload<T: DeserializeOwned>(kind: &str, content: Value) -> Result<T, CommandError> {
    serde_json::from_value(content).map_err(|e| CommandError::malformed(kind, e.to_string()))
}

impl TryFrom<CommandMessage> for Envelope {
    type Error = CommandError;

    fn try_from(msg: CommandMessage) -> Result<Self, Self::Error> {
        let kind = msg.kind.as_str();
        let content = msg.content;
        let command = match kind {
            "join" => Command::Join {
                player_id: payload(kind, content)?,
            },
            "leave" => Command::Leave {
                player_id: payload(kind, content)?,
            },
            "fire" => Command::Fire {
                player_id: payload(kind, content)?,
            },
            "move_player" => {
                let p: MovePlayerPayload = payload(kind, content)?;
                Command::MovePlayer {
                    player_id: p.player_id,
                    acceleration: Vector2D::new(p.x, p.y),
                }
            }
            "move_enemy" => {
                let p: MoveEnemyPayload = payload(kind, content)?;
                Command::MoveEnemy {
                    enemy_id: p.enemy_id,
                    position: Vector2D::new(p.x, p.y),
                }
            }
            "move_projectile" => Command::MoveProjectile {
                projectile_id: payload(kind, content)?,
            },
            "damage_player" => {
                let p: DamagePayload = payload(kind, content)?;
                Command::DamagePlayer {
                    player_id: p.id,
                    amount: p.amount,
                }
            }
            "damage_enemy" => {
                let p: DamagePayload = payload(kind, content)?;
                Command::DamageEnemy {
                    enemy_id: p.id,
                    amount: p.amount,
                }
            }
            "score" => {
                let p: ScorePayload = payload(kind, content)?;
                Command::Score {
                    player_id: p.player_id,
                    points: p.points,
                }
            }
            "update" => {
                if !content.is_null() {
                    return Err(CommandError::malformed(kind, "update takes no content"));
                }
                Command::Update
            }
            other => {
                return Err(CommandError::malformed(other, "unknown command type"));
            }
        };

        Ok(Envelope::new(msg.sender, command))
    }
}

impl From<&Envelope> for CommandMessage {
    fn from(envelope: &Envelope) -> Self {
        let content = match &envelope.command {
            Command::Join { player_id }
            | Command::Leave { player_id }
            | Command::Fire { player_id } => Value::from(*player_id),
            Command::MovePlayer {
                player_id,
                acceleration,
            } => to_value(MovePlayerPayload {
                player_id: *player_id,
                x: acceleration.x,
                y: acceleration.y,
            }),
            Command::MoveEnemy { enemy_id, position } => to_value(MoveEnemyPayload {
                enemy_id: *enemy_id,
                x: position.x,
                y: position.y,
            }),
            Command::MoveProjectile { projectile_id } => Value::from(*projectile_id),
            Command::DamagePlayer { player_id, amount } => to_value(DamagePayload {
                id: *player_id,
                amount: *amount,
            }),
            Command::DamageEnemy { enemy_id, amount } => to_value(DamagePayload {
                id: *enemy_id,
                amount: *amount,
            }),
            Command::Score { player_id, points } => to_value(ScorePayload {
                player_id: *player_id,
                points: *points,
            }),
            Command::Update => Value::Null,
        };

        Self {
            kind: envelope.command.name().to_string(),
            content,
            sender: envelope.sender,
        }
    }
}

// Payload structs only hold numbers and strings; serializing them cannot fail.
fn to_value<T: Serialize>(payload: T) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}

/// Parses one JSON command message.
pub fn decode_envelope(text: &str) -> Result<Envelope, CommandError> {
    let msg: CommandMessage =
        serde_json::from_str(text).map_err(|e| CommandError::malformed("message", e.to_string()))?;
    Envelope::try_from(msg)
}

pub fn encode_envelope(envelope: &Envelope) -> String {
    // A `CommandMessage` is a string, a JSON value and an integer.
    serde_json::to_string(&CommandMessage::from(envelope)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_join_message_is_valid_then_it_decodes_with_sender() {
        let envelope = decode_envelope(r#"{"type":"join","content":4,"sender":9}"#)
            .expect("join should decode");

        assert_eq!(envelope, Envelope::new(9, Command::Join { player_id: 4 }));
    }

    #[test]
    fn when_update_has_no_content_then_it_decodes() {
        let envelope = decode_envelope(r#"{"type":"update"}"#).expect("update should decode");
        assert_eq!(envelope.command, Command::Update);
        assert_eq!(envelope.sender, 0);
    }

    #[test]
    fn when_move_player_payload_is_valid_then_acceleration_is_typed() {
        let envelope = decode_envelope(
            r#"{"type":"move_player","content":{"player_id":1,"x":0.5,"y":-0.25},"sender":1}"#,
        )
        .expect("move should decode");

        assert_eq!(
            envelope.command,
            Command::MovePlayer {
                player_id: 1,
                acceleration: Vector2D::new(0.5, -0.25)
            }
        );
    }

    #[test]
    fn when_fire_content_is_a_string_then_payload_is_malformed() {
        let err = decode_envelope(r#"{"type":"fire","content":"seven"}"#)
            .expect_err("string id should be rejected");

        assert!(matches!(
            err,
            CommandError::MalformedPayload { ref command, .. } if command == "fire"
        ));
    }

    #[test]
    fn when_damage_amount_is_missing_then_payload_is_malformed() {
        let err = decode_envelope(r#"{"type":"damage_enemy","content":{"id":3}}"#)
            .expect_err("missing amount should be rejected");

        assert!(matches!(err, CommandError::MalformedPayload { .. }));
    }

    #[test]
    fn when_player_id_is_negative_then_payload_is_malformed() {
        let err = decode_envelope(r#"{"type":"leave","content":-1}"#)
            .expect_err("negative id should be rejected");

        assert!(matches!(err, CommandError::MalformedPayload { .. }));
    }

    #[test]
    fn when_update_carries_content_then_payload_is_malformed() {
        let err = decode_envelope(r#"{"type":"update","content":5}"#)
            .expect_err("update content should be rejected");

        assert!(matches!(err, CommandError::MalformedPayload { .. }));
    }

    #[test]
    fn when_type_is_unknown_then_message_is_rejected() {
        let err = decode_envelope(r#"{"type":"destroy","content":1}"#)
            .expect_err("unknown type should be rejected");

        assert_eq!(
            err,
            CommandError::MalformedPayload {
                command: "destroy".to_string(),
                reason: "unknown command type".to_string()
            }
        );
    }

    #[test]
    fn when_text_is_not_json_then_message_is_rejected() {
        assert!(decode_envelope("not json").is_err());
    }

    #[test]
    fn when_score_is_encoded_then_it_decodes_to_the_same_envelope() {
        let envelope = Envelope::new(
            2,
            Command::Score {
                player_id: 2,
                points: 10,
            },
        );

        let text = encode_envelope(&envelope);

        assert_eq!(
            serde_json::from_str::<Value>(&text).expect("json"),
            serde_json::json!({"type": "score", "content": {"player_id": 2, "points": 10}, "sender": 2})
        );
        assert_eq!(decode_envelope(&text).expect("decode"), envelope);
    }
}
