// ============================================================================
// src/ps2/mod.rs - PS/2 Keyboard Decoding
// ============================================================================
//!
//! PS/2キーボード入力のデコード
//!
//! - スキャンコード表（名前空間ごと）
//! - プレフィックス処理と修飾キー管理を行うデコーダ
//! - キー識別子・修飾キー・キーイベント型
//!

mod constants;
mod keyboard;
mod keycode;
mod shared;

pub mod scancode;

pub use constants::{ControlCode, codes};
pub use keyboard::{Decode, KeyboardDecoder, PAUSE_KEY, PrefixState};
pub use keycode::{KeyEvent, KeyIdentity, Modifiers};
pub use scancode::Namespace;
pub use shared::SharedDecoder;
