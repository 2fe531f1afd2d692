//! エラー型
//!
//! デコーダ本体はエラーを返さない（不明なバイトは「イベントなし」になる）。
//! ここで定義するのはクレート境界での値変換の失敗のみ。

use core::fmt;

/// 値変換エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ps2Error {
    /// キー識別子として定義されていない値
    UnknownKeyIdentity(u8),
    /// 修飾キーとして定義されていないビット
    InvalidModifierBits(u8),
    /// 制御コード（プレフィックス・応答コード）ではない値
    UnknownControlCode(u8),
}

/// クレート共通のResult型
pub type Result<T> = core::result::Result<T, Ps2Error>;

impl fmt::Display for Ps2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ps2Error::UnknownKeyIdentity(value) => {
                write!(f, "unknown key identity: {:#04x}", value)
            }
            Ps2Error::InvalidModifierBits(bits) => {
                write!(f, "invalid modifier bits: {:#04x}", bits)
            }
            Ps2Error::UnknownControlCode(value) => {
                write!(f, "not a control code: {:#04x}", value)
            }
        }
    }
}

impl core::error::Error for Ps2Error {}

// ============================================================================
// テスト
// ============================================================================
