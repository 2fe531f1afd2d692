// ============================================================================
// src/ps2/constants.rs - PS/2 Keyboard Control Codes
// ============================================================================

use crate::error::{Ps2Error, Result};

/// キーボードから送られる制御コード
///
/// キー識別用ではないバイト値。プレフィックスはデコーダの状態を変え、
/// 応答コードはデコーダを素通りする（イベントにならない）。
pub mod codes {
    pub const NONE: u8 = 0x00;           // ストリーム終端（バス層が「データなし」に使う）
    pub const BAT_SUCCESSFUL: u8 = 0xAA; // 自己診断成功（リセット・電源投入後）
    pub const EXTEND: u8 = 0xE0;         // 拡張プレフィックス
    pub const EXTEND1: u8 = 0xE1;        // 拡張1プレフィックス（Pause/Breakのみ）
    pub const ECHO: u8 = 0xEE;           // エコー応答
    pub const UNMAKE: u8 = 0xF0;         // ブレーク（キー解放）プレフィックス
    pub const ACK: u8 = 0xFA;            // コマンド受理
    pub const BAT_FAILURE: u8 = 0xFC;    // 自己診断失敗
    pub const GARBLED: u8 = 0xFE;        // 受信化け / 再送要求（NACK）
}

/// 制御コードの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ControlCode {
    None = codes::NONE,
    BatSuccessful = codes::BAT_SUCCESSFUL,
    Extend = codes::EXTEND,
    Extend1 = codes::EXTEND1,
    Echo = codes::ECHO,
    Unmake = codes::UNMAKE,
    Ack = codes::ACK,
    BatFailure = codes::BAT_FAILURE,
    Garbled = codes::GARBLED,
}

impl ControlCode {
    /// 全制御コード（値の昇順）
    pub const ALL: [ControlCode; 9] = [
        ControlCode::None,
        ControlCode::BatSuccessful,
        ControlCode::Extend,
        ControlCode::Extend1,
        ControlCode::Echo,
        ControlCode::Unmake,
        ControlCode::Ack,
        ControlCode::BatFailure,
        ControlCode::Garbled,
    ];

    /// 生バイトから制御コードを判定
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            codes::NONE => Some(ControlCode::None),
            codes::BAT_SUCCESSFUL => Some(ControlCode::BatSuccessful),
            codes::EXTEND => Some(ControlCode::Extend),
            codes::EXTEND1 => Some(ControlCode::Extend1),
            codes::ECHO => Some(ControlCode::Echo),
            codes::UNMAKE => Some(ControlCode::Unmake),
            codes::ACK => Some(ControlCode::Ack),
            codes::BAT_FAILURE => Some(ControlCode::BatFailure),
            codes::GARBLED => Some(ControlCode::Garbled),
            _ => None,
        }
    }

    /// 生バイト値
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// デコーダの状態を変えるプレフィックスか
    pub const fn is_prefix(self) -> bool {
        matches!(
            self,
            ControlCode::Extend | ControlCode::Extend1 | ControlCode::Unmake
        )
    }

    /// デバイスの応答（初期化ハンドシェイク・エラー通知）か
    pub const fn is_response(self) -> bool {
        matches!(
            self,
            ControlCode::BatSuccessful
                | ControlCode::Echo
                | ControlCode::Ack
                | ControlCode::BatFailure
                | ControlCode::Garbled
        )
    }
}

impl TryFrom<u8> for ControlCode {
    type Error = Ps2Error;

    fn try_from(raw: u8) -> Result<Self> {
        Self::from_raw(raw).ok_or(Ps2Error::UnknownControlCode(raw))
    }
}

impl From<ControlCode> for u8 {
    fn from(code: ControlCode) -> u8 {
        code.raw()
    }
}

// ============================================================================
// テスト
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_code_from_raw() {
        for code in ControlCode::ALL {
            assert_eq!(ControlCode::from_raw(code.raw()), Some(code));
        }
        assert_eq!(ControlCode::from_raw(0x1C), None);
        assert_eq!(
            ControlCode::try_from(0x1C),
            Err(Ps2Error::UnknownControlCode(0x1C))
        );
    }

    #[test]
    fn test_prefix_and_response_are_disjoint() {
        for code in ControlCode::ALL {
            assert!(!(code.is_prefix() && code.is_response()));
        }
        assert!(ControlCode::Unmake.is_prefix());
        assert!(ControlCode::Ack.is_response());
        assert!(!ControlCode::None.is_prefix());
        assert!(!ControlCode::None.is_response());
    }
}
