// ============================================================================
// src/lib.rs - PS/2 Scan Code Set 2 Decoder
// ============================================================================
//!
//! # PS/2 スキャンコードデコーダ
//!
//! PS/2キーボードが送出するスキャンコードセット2のバイト列を、
//! キー識別子と修飾キー状態を持つキーイベントへ変換する。
//!
//! ## 構成
//! - [`ps2::scancode`]: スキャンコード表（セット2基本・セット2拡張・セット3参照用）
//! - [`ps2::KeyboardDecoder`]: 1バイトずつ受け取るステートマシン
//! - [`ps2::SharedDecoder`]: 割り込みハンドラから使うためのロック付きラッパー
//!
//! ## 使用方法
//! ```rust
//! use ps2_scancode::{KeyboardDecoder, KeyIdentity, Modifiers};
//!
//! let mut decoder = KeyboardDecoder::new();
//! assert_eq!(decoder.consume(0x12), None); // 左Shift押下
//! let event = decoder.consume(0x1C).unwrap(); // 'A'押下
//! assert_eq!(event.key(), KeyIdentity::A);
//! assert_eq!(event.modifiers(), Modifiers::SHIFT);
//! ```
//!
//! バスのタイミング制御・パリティ検査・デバイス初期化はホスト側の責務。

#![no_std]

pub mod error;
pub mod ps2;

pub use error::{Ps2Error, Result};
pub use ps2::{
    ControlCode, Decode, KeyEvent, KeyIdentity, KeyboardDecoder, Modifiers, Namespace,
    SharedDecoder,
};
