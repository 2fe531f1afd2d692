// ============================================================================
// src/ps2/keycode.rs - Key Identities, Modifiers and Events
// ============================================================================

use core::fmt;

use bitflags::bitflags;

use crate::error::{Ps2Error, Result};

macro_rules! key_identities {
    ($( $(#[$meta:meta])* $name:ident = $value:literal, )*) => {
        /// キー識別子
        ///
        /// 配線上のスキャンコードとは独立した、正規化済みのキー番号。
        /// 値は安定しており、キーイベントの下位バイトにそのまま入る。
        /// 0x00 はどのキーにも割り当てない。
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum KeyIdentity {
            $( $(#[$meta])* $name = $value, )*
        }

        impl KeyIdentity {
            /// 全キー識別子（値の昇順）
            pub const ALL: &'static [KeyIdentity] = &[ $( KeyIdentity::$name, )* ];

            /// 数値からキー識別子へ変換
            pub const fn from_u8(value: u8) -> Option<Self> {
                match value {
                    $( $value => Some(KeyIdentity::$name), )*
                    _ => None,
                }
            }
        }
    };
}

key_identities! {
    NumLock = 0x01,
    ScrollLock = 0x02,
    CapsLock = 0x03,
    PrintScreen = 0x04,
    Pause = 0x05,
    LeftShift = 0x06,
    RightShift = 0x07,
    LeftCtrl = 0x08,
    RightCtrl = 0x09,
    LeftAlt = 0x0A,
    RightAlt = 0x0B,
    /// Windowsキーとも呼ばれる
    LeftGui = 0x0C,
    RightGui = 0x0D,
    Menu = 0x0E,
    /// Ctrl+Pause（キーボード内部で生成される）
    Break = 0x0F,
    /// Alt+PrintScreen（一部のキーボードが生成）
    SysRq = 0x10,
    Home = 0x11,
    End = 0x12,
    PageUp = 0x13,
    PageDown = 0x14,
    LeftArrow = 0x15,
    RightArrow = 0x16,
    UpArrow = 0x17,
    DownArrow = 0x18,
    Insert = 0x19,
    Delete = 0x1A,
    Escape = 0x1B,
    Backspace = 0x1C,
    Tab = 0x1D,
    Enter = 0x1E,
    Space = 0x1F,

    // テンキー
    Keypad0 = 0x20,
    Keypad1 = 0x21,
    Keypad2 = 0x22,
    Keypad3 = 0x23,
    Keypad4 = 0x24,
    Keypad5 = 0x25,
    Keypad6 = 0x26,
    Keypad7 = 0x27,
    Keypad8 = 0x28,
    Keypad9 = 0x29,
    KeypadDot = 0x2A,
    KeypadEnter = 0x2B,
    KeypadPlus = 0x2C,
    KeypadMinus = 0x2D,
    KeypadTimes = 0x2E,
    KeypadDivide = 0x2F,

    // 数字キー
    Digit0 = 0x30,
    Digit1 = 0x31,
    Digit2 = 0x32,
    Digit3 = 0x33,
    Digit4 = 0x34,
    Digit5 = 0x35,
    Digit6 = 0x36,
    Digit7 = 0x37,
    Digit8 = 0x38,
    Digit9 = 0x39,

    // 記号キー
    Apostrophe = 0x3A,
    Comma = 0x3B,
    Minus = 0x3C,
    Dot = 0x3D,
    Slash = 0x3E,
    /// 一部のテンキーにある '='
    KeypadEqual = 0x3F,
    Backtick = 0x40,

    // 文字キー
    A = 0x41,
    B = 0x42,
    C = 0x43,
    D = 0x44,
    E = 0x45,
    F = 0x46,
    G = 0x47,
    H = 0x48,
    I = 0x49,
    J = 0x4A,
    K = 0x4B,
    L = 0x4C,
    M = 0x4D,
    N = 0x4E,
    O = 0x4F,
    P = 0x50,
    Q = 0x51,
    R = 0x52,
    S = 0x53,
    T = 0x54,
    U = 0x55,
    V = 0x56,
    W = 0x57,
    X = 0x58,
    Y = 0x59,
    Z = 0x5A,
    Semicolon = 0x5B,
    Backslash = 0x5C,
    OpenBracket = 0x5D,
    CloseBracket = 0x5E,
    Equal = 0x5F,
    /// 一部のテンキーにある ','
    KeypadComma = 0x60,

    // ファンクションキー
    F1 = 0x61,
    F2 = 0x62,
    F3 = 0x63,
    F4 = 0x64,
    F5 = 0x65,
    F6 = 0x66,
    F7 = 0x67,
    F8 = 0x68,
    F9 = 0x69,
    F10 = 0x6A,
    F11 = 0x6B,
    F12 = 0x6C,
    F13 = 0x6D,
    F14 = 0x6E,
    F15 = 0x6F,
    F16 = 0x70,
    F17 = 0x71,
    F18 = 0x72,
    F19 = 0x73,
    F20 = 0x74,
    F21 = 0x75,
    F22 = 0x76,
    F23 = 0x77,
    F24 = 0x78,

    // マルチメディアキー
    NextTrack = 0x79,
    PrevTrack = 0x7A,
    Stop = 0x7B,
    Play = 0x7C,
    Mute = 0x7D,
    VolumeUp = 0x7E,
    VolumeDown = 0x7F,
    MediaSelect = 0x80,
    Email = 0x81,
    Calculator = 0x82,
    Computer = 0x83,
    WebSearch = 0x84,
    WebHome = 0x85,
    WebBack = 0x86,
    WebForward = 0x87,
    WebStop = 0x88,
    WebRefresh = 0x89,
    WebFavorites = 0x8A,
    /// 102キーボードのZ左隣
    Europe2 = 0x8B,
    Power = 0x8C,
    Sleep = 0x8D,
    Wake = 0x90,

    // 各国語キー
    Intl1 = 0x91,
    Intl2 = 0x92,
    Intl3 = 0x93,
    Intl4 = 0x94,
    Intl5 = 0x95,
    Lang1 = 0x96,
    Lang2 = 0x97,
    Lang3 = 0x98,
    Lang4 = 0x99,
    Lang5 = 0xA0,
}

impl KeyIdentity {
    /// 数値表現
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// このキーが操作する修飾キービット（修飾キーでなければNone）
    pub const fn modifier(self) -> Option<Modifiers> {
        match self {
            KeyIdentity::LeftShift | KeyIdentity::RightShift => Some(Modifiers::SHIFT),
            KeyIdentity::LeftCtrl | KeyIdentity::RightCtrl => Some(Modifiers::CTRL),
            KeyIdentity::LeftAlt | KeyIdentity::RightAlt => Some(Modifiers::ALT),
            KeyIdentity::LeftGui | KeyIdentity::RightGui => Some(Modifiers::GUI),
            _ => None,
        }
    }

    pub const fn is_modifier(self) -> bool {
        self.modifier().is_some()
    }
}

impl TryFrom<u8> for KeyIdentity {
    type Error = Ps2Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_u8(value).ok_or(Ps2Error::UnknownKeyIdentity(value))
    }
}

impl From<KeyIdentity> for u8 {
    fn from(key: KeyIdentity) -> u8 {
        key.as_u8()
    }
}

// ============================================================================
// 修飾キー
// ============================================================================

bitflags! {
    /// 修飾キー状態
    ///
    /// キーイベントの上位バイトに入るビット配置。
    /// 左右の区別は持たない（左右どちらのShiftも`SHIFT`を操作する）。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// GUI（Windows）キー
        const GUI = 0x02;
        /// Altキー
        const ALT = 0x08;
        /// Ctrlキー
        const CTRL = 0x20;
        /// Shiftキー
        const SHIFT = 0x40;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

impl Modifiers {
    pub const fn shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub const fn ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    pub const fn alt(&self) -> bool {
        self.contains(Self::ALT)
    }

    pub const fn gui(&self) -> bool {
        self.contains(Self::GUI)
    }
}

// ============================================================================
// キーイベント
// ============================================================================

/// キーイベント
///
/// キー押下1回につき1つ生成される。16ビット表現では下位バイトが
/// [`KeyIdentity`]、上位バイトが生成時点の[`Modifiers`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    key: KeyIdentity,
    modifiers: Modifiers,
}

impl KeyEvent {
    /// 16ビット表現のうち修飾キーが占める部分
    pub const MODIFIER_MASK: u16 = 0xFF00;

    pub const fn new(key: KeyIdentity, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// キー識別子
    pub const fn key(&self) -> KeyIdentity {
        self.key
    }

    /// 生成時点の修飾キー状態
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub const fn shift(&self) -> bool {
        self.modifiers.shift()
    }

    pub const fn ctrl(&self) -> bool {
        self.modifiers.ctrl()
    }

    pub const fn alt(&self) -> bool {
        self.modifiers.alt()
    }

    pub const fn gui(&self) -> bool {
        self.modifiers.gui()
    }

    /// 16ビット表現へ変換
    pub const fn to_raw(self) -> u16 {
        ((self.modifiers.bits() as u16) << 8) | self.key as u16
    }

    /// 16ビット表現から復元
    pub fn from_raw(raw: u16) -> Result<Self> {
        let [key, bits] = raw.to_le_bytes();
        let key = KeyIdentity::try_from(key)?;
        let modifiers = Modifiers::from_bits(bits).ok_or(Ps2Error::InvalidModifierBits(bits))?;
        Ok(Self::new(key, modifiers))
    }
}

impl From<KeyEvent> for u16 {
    fn from(event: KeyEvent) -> u16 {
        event.to_raw()
    }
}

impl TryFrom<u16> for KeyEvent {
    type Error = Ps2Error;

    fn try_from(raw: u16) -> Result<Self> {
        Self::from_raw(raw)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, _) in self.modifiers.iter_names() {
            write!(f, "{}+", name)?;
        }
        write!(f, "{:?}", self.key)
    }
}

// ============================================================================
// テスト
// ============================================================================
