// ============================================================================
// src/ps2/scancode/set2_extended.rs - Scan Code Set 2 (E0-prefixed)
// ============================================================================
//!
//! スキャンコードセット2・E0 プレフィックス後のコード
//!
//! 押下は E0 + 1バイト、解放は E0 F0 + 同じ1バイト。
//! 右Shiftは拡張側に存在しない。
//!
//! PrintScreen は押下の前後に偽の E0 12（左Shift相当）を伴うことが多い。
//! E0 12 はこの表に無いので、デコーダは単に無視する。
//!
//! E0 7E を Break とする資料もあるが、手元の実機と一致しないため割り当てない。

scancode_table! {
    // 修飾キー（基本側の左Ctrl/左Altと同じ値）
    RIGHT_CTRL = 0x14 => RightCtrl,
    RIGHT_ALT = 0x11 => RightAlt,
    LEFT_GUI = 0x1F => LeftGui,
    RIGHT_GUI = 0x27 => RightGui,

    PRINT_SCREEN = 0x7C => PrintScreen,
    // "Apps" キー
    MENU = 0x2F => Menu,

    // ナビゲーションキー
    HOME = 0x6C => Home,
    END = 0x69 => End,
    PAGE_UP = 0x7D => PageUp,
    PAGE_DOWN = 0x7A => PageDown,
    LEFT_ARROW = 0x6B => LeftArrow,
    RIGHT_ARROW = 0x74 => RightArrow,
    UP_ARROW = 0x75 => UpArrow,
    DOWN_ARROW = 0x72 => DownArrow,
    INSERT = 0x70 => Insert,
    DELETE = 0x71 => Delete,

    // テンキー
    KEYPAD_ENTER = 0x5A => KeypadEnter,
    KEYPAD_FORWARD_SLASH = 0x4A => KeypadDivide,

    // マルチメディアキー
    NEXT_TRACK = 0x4D => NextTrack,
    PREV_TRACK = 0x15 => PrevTrack,
    STOP = 0x3B => Stop,
    PLAY = 0x34 => Play,
    MUTE = 0x23 => Mute,
    VOLUME_UP = 0x32 => VolumeUp,
    VOLUME_DOWN = 0x21 => VolumeDown,
    MEDIA_SELECT = 0x50 => MediaSelect,
    EMAIL = 0x48 => Email,
    CALCULATOR = 0x2B => Calculator,
    MY_COMPUTER = 0x40 => Computer,

    // Webキー
    WEB_SEARCH = 0x10 => WebSearch,
    WEB_HOME = 0x3A => WebHome,
    WEB_BACK = 0x38 => WebBack,
    WEB_FORWARD = 0x30 => WebForward,
    WEB_STOP = 0x28 => WebStop,
    WEB_REFRESH = 0x20 => WebRefresh,
    WEB_FAVORITES = 0x18 => WebFavorites,

    // 電源管理キー
    POWER = 0x37 => Power,
    SLEEP = 0x3F => Sleep,
    WAKE = 0x5E => Wake,
}
