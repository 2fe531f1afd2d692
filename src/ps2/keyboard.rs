// ============================================================================
// src/ps2/keyboard.rs - Scan Code Set 2 Decoder
// ============================================================================
//!
//! # スキャンコードセット2デコーダ
//!
//! バスから受け取った生バイトを1つずつ処理し、キー押下ごとに
//! [`KeyEvent`]を1つ生成するステートマシン。
//!
//! ## 処理規則（上から順に判定、最初に一致したもので確定）
//! 1. `00`: 何もしない
//! 2. `F0`: 解放フラグを立てる
//! 3. `E0`: 拡張フラグを立てる
//! 4. `E1`: Pause シーケンス開始
//! 5. Pause シーケンス中: 1バイト目は読み捨て、2バイト目で Break を生成
//!    （解放フラグがあれば生成しない）
//! 6. 修飾キー: 修飾キーマスクを更新（イベントは生成しない）
//! 7. 解放フラグあり: 通常キーの解放はイベントにしない
//! 8. 押下: 名前空間に応じて解決し、修飾キー状態を付けてイベント化
//!
//! 5〜8のあとは必ずプレフィックス状態を初期化する。修飾キーマスクは
//! [`KeyboardDecoder::clear_modifiers`]を明示的に呼んだときだけ消える。
//!
//! ## エラー処理
//! デコーダは失敗しない。不明なバイトは「イベントなし」になり、
//! 壊れたプレフィックス列も次のプレフィックス以外のバイトで回復する。

use super::constants::{ControlCode, codes};
use super::keycode::{KeyEvent, KeyIdentity, Modifiers};
use super::scancode::Namespace;

/// Pause/Break キーを押したときに生成するキー識別子
pub const PAUSE_KEY: KeyIdentity = KeyIdentity::Break;

// ============================================================================
// プレフィックス状態
// ============================================================================

/// 受信済みプレフィックスの状態
///
/// 解放・拡張・拡張1の組み合わせのうち、プロトコル上あり得るものだけを表す。
/// 拡張1（Pause シーケンス）中は拡張フラグに意味がないので持たない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixState {
    /// プレフィックスなし
    #[default]
    Idle,
    /// F0 受信済み
    Release,
    /// E0 受信済み
    Extended,
    /// E0 F0 受信済み
    ExtendedRelease,
    /// E1 受信済み（Pause シーケンス）
    Pause {
        /// F0 受信済みか
        release: bool,
        /// ペイロード1バイト目を受信済みか
        payload_seen: bool,
    },
}

impl PrefixState {
    /// F0 を受信
    const fn with_release(self) -> Self {
        match self {
            PrefixState::Idle | PrefixState::Release => PrefixState::Release,
            PrefixState::Extended | PrefixState::ExtendedRelease => PrefixState::ExtendedRelease,
            PrefixState::Pause { payload_seen, .. } => PrefixState::Pause {
                release: true,
                payload_seen,
            },
        }
    }

    /// E0 を受信
    const fn with_extended(self) -> Self {
        match self {
            PrefixState::Idle | PrefixState::Extended => PrefixState::Extended,
            PrefixState::Release | PrefixState::ExtendedRelease => PrefixState::ExtendedRelease,
            pause @ PrefixState::Pause { .. } => pause,
        }
    }

    /// E1 を受信
    const fn with_extended1(self) -> Self {
        match self {
            PrefixState::Idle | PrefixState::Extended => PrefixState::Pause {
                release: false,
                payload_seen: false,
            },
            PrefixState::Release | PrefixState::ExtendedRelease => PrefixState::Pause {
                release: true,
                payload_seen: false,
            },
            pause @ PrefixState::Pause { .. } => pause,
        }
    }

    /// 解放フラグが立っているか
    pub const fn is_release(self) -> bool {
        matches!(
            self,
            PrefixState::Release
                | PrefixState::ExtendedRelease
                | PrefixState::Pause { release: true, .. }
        )
    }

    /// 次のバイトを解決する名前空間
    pub const fn namespace(self) -> Namespace {
        match self {
            PrefixState::Extended | PrefixState::ExtendedRelease => Namespace::Set2Extended,
            _ => Namespace::Set2,
        }
    }
}

// ============================================================================
// デコーダ
// ============================================================================

/// キーボードデコーダ
///
/// キーボード1台につき1インスタンス。複数のキーボードを扱う場合は
/// それぞれに別のデコーダを用意すること。
#[derive(Debug, Clone)]
pub struct KeyboardDecoder {
    /// プレフィックス状態
    prefix: PrefixState,
    /// 修飾キー状態
    modifiers: Modifiers,
}

impl KeyboardDecoder {
    /// 新しいデコーダを作成
    pub const fn new() -> Self {
        Self {
            prefix: PrefixState::Idle,
            modifiers: Modifiers::empty(),
        }
    }

    /// 生バイトを1つ処理
    ///
    /// キー押下が確定したときだけ`Some`を返す。
    pub fn consume(&mut self, raw: u8) -> Option<KeyEvent> {
        #[cfg(feature = "verbose_logging")]
        log::trace!("ps2: byte {:#04x} prefix={:?}", raw, self.prefix);

        match raw {
            codes::NONE => return None,
            codes::UNMAKE => {
                self.prefix = self.prefix.with_release();
                return None;
            }
            codes::EXTEND => {
                self.prefix = self.prefix.with_extended();
                return None;
            }
            codes::EXTEND1 => {
                self.prefix = self.prefix.with_extended1();
                return None;
            }
            _ => {}
        }

        if let PrefixState::Pause {
            release,
            payload_seen,
        } = self.prefix
        {
            // E1 を使うキーは Pause だけなので、ペイロードの中身は見ない
            if !payload_seen {
                self.prefix = PrefixState::Pause {
                    release,
                    payload_seen: true,
                };
                return None;
            }
            self.reset();
            return (!release).then(|| KeyEvent::new(PAUSE_KEY, self.modifiers));
        }

        let namespace = self.prefix.namespace();
        let release = self.prefix.is_release();
        self.reset();

        let Some(key) = namespace.resolve(raw) else {
            match ControlCode::from_raw(raw) {
                Some(code) => log::debug!("ps2: device response {:?} passed through", code),
                None => log::debug!("ps2: unrecognized {:?} code {:#04x}", namespace, raw),
            }
            return None;
        };

        if let Some(bit) = key.modifier() {
            self.modifiers.set(bit, !release);
            log::debug!("ps2: {:?} {} -> {:?}", key, if release { "up" } else { "down" }, self.modifiers);
            return None;
        }

        if release {
            return None;
        }

        Some(KeyEvent::new(key, self.modifiers))
    }

    /// プレフィックス状態を初期化（修飾キー状態は保持）
    ///
    /// フレーミングエラー検出後などの回復用。
    pub fn reset(&mut self) {
        self.prefix = PrefixState::Idle;
    }

    /// 修飾キー状態を消去
    pub fn clear_modifiers(&mut self) {
        self.modifiers = Modifiers::empty();
    }

    /// 現在の修飾キー状態
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// 現在のプレフィックス状態
    pub const fn prefix(&self) -> PrefixState {
        self.prefix
    }

    /// バイト列をまとめて処理し、生成されたイベントだけを返すイテレータ
    ///
    /// バッファリングはせず、イテレータを進めた分だけバイトを消費する。
    pub fn decode<I>(&mut self, bytes: I) -> Decode<'_, I::IntoIter>
    where
        I: IntoIterator<Item = u8>,
    {
        Decode {
            decoder: self,
            bytes: bytes.into_iter(),
        }
    }
}

impl Default for KeyboardDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// [`KeyboardDecoder::decode`]が返すイテレータ
pub struct Decode<'a, I> {
    decoder: &'a mut KeyboardDecoder,
    bytes: I,
}

impl<I> Iterator for Decode<'_, I>
where
    I: Iterator<Item = u8>,
{
    type Item = KeyEvent;

    fn next(&mut self) -> Option<KeyEvent> {
        self.bytes.find_map(|raw| self.decoder.consume(raw))
    }
}

// ============================================================================
// テスト
// ============================================================================
