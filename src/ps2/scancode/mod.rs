// ============================================================================
// src/ps2/scancode/mod.rs - Scan Code Catalog
// ============================================================================
//!
//! スキャンコード表
//!
//! 同じ数値が名前空間ごとに別のキーを表す（例: 0x5A はセット2基本では
//! Enter、E0 プレフィックス後はテンキーEnter）。そのため表は名前空間ごとに
//! 完全に分け、単一のフラットな表にはしない。
//!
//! - [`set2`]: セット2基本（プレフィックスなし）
//! - [`set2_extended`]: セット2拡張（E0 プレフィックス後）
//! - [`set3`]: セット3（1キー1バイト、参照用。デコーダは使わない）
//!
//! 公開されているスキャンコード表はどれも不完全で、ここにある値も
//! 「知られている範囲で最善」のものに過ぎない。

use super::keycode::KeyIdentity;

/// スキャンコード表を定義する
///
/// 名前付き定数・エントリ一覧・`resolve`関数を生成する。
/// 同じ名前空間内で生バイト値が重複すると到達不能パターンになる。
macro_rules! scancode_table {
    ($( $name:ident = $raw:literal => $key:ident, )*) => {
        $( pub const $name: u8 = $raw; )*

        /// この名前空間の全エントリ（生バイト, キー識別子）
        pub const ENTRIES: &[(u8, $crate::ps2::KeyIdentity)] = &[
            $( ($raw, $crate::ps2::KeyIdentity::$key), )*
        ];

        /// 生バイトをキー識別子へ変換（未割り当てならNone）
        pub const fn resolve(raw: u8) -> Option<$crate::ps2::KeyIdentity> {
            match raw {
                $( $raw => Some($crate::ps2::KeyIdentity::$key), )*
                _ => None,
            }
        }
    };
}

pub mod set2;
pub mod set2_extended;
pub mod set3;

/// スキャンコードの名前空間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// セット2基本
    Set2,
    /// セット2拡張（E0 プレフィックス後）
    Set2Extended,
    /// セット3（参照用）
    Set3,
}

impl Namespace {
    pub const ALL: [Namespace; 3] = [Namespace::Set2, Namespace::Set2Extended, Namespace::Set3];

    /// この名前空間で生バイトを解決
    pub const fn resolve(self, raw: u8) -> Option<KeyIdentity> {
        match self {
            Namespace::Set2 => set2::resolve(raw),
            Namespace::Set2Extended => set2_extended::resolve(raw),
            Namespace::Set3 => set3::resolve(raw),
        }
    }

    /// この名前空間の全エントリ
    pub const fn entries(self) -> &'static [(u8, KeyIdentity)] {
        match self {
            Namespace::Set2 => set2::ENTRIES,
            Namespace::Set2Extended => set2_extended::ENTRIES,
            Namespace::Set3 => set3::ENTRIES,
        }
    }

    /// キー識別子からこの名前空間の生バイトを逆引き
    pub fn code_of(self, key: KeyIdentity) -> Option<u8> {
        self.entries()
            .iter()
            .find(|&&(_, k)| k == key)
            .map(|&(raw, _)| raw)
    }
}

// ============================================================================
// テスト
// ============================================================================
