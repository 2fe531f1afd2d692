// ============================================================================
// src/ps2/scancode/set2.rs - Scan Code Set 2 (baseline)
// ============================================================================
//!
//! スキャンコードセット2・プレフィックスなしのコード
//!
//! 押下は1バイト、解放は F0 + 同じ1バイト。

scancode_table! {
    // ロック・修飾キー
    NUM_LOCK = 0x77 => NumLock,
    SCROLL_LOCK = 0x7E => ScrollLock,
    CAPS_LOCK = 0x58 => CapsLock,
    LEFT_SHIFT = 0x12 => LeftShift,
    RIGHT_SHIFT = 0x59 => RightShift,
    LEFT_CTRL = 0x14 => LeftCtrl,
    LEFT_ALT = 0x11 => LeftAlt,
    SYS_REQUEST = 0x84 => SysRq,

    // 特殊キー
    ESCAPE = 0x76 => Escape,
    BACKSPACE = 0x66 => Backspace,
    TAB = 0x0D => Tab,
    ENTER = 0x5A => Enter,
    SPACE = 0x29 => Space,

    // テンキー
    KEYPAD_0 = 0x70 => Keypad0,
    KEYPAD_1 = 0x69 => Keypad1,
    KEYPAD_2 = 0x72 => Keypad2,
    KEYPAD_3 = 0x7A => Keypad3,
    KEYPAD_4 = 0x6B => Keypad4,
    KEYPAD_5 = 0x73 => Keypad5,
    KEYPAD_6 = 0x74 => Keypad6,
    KEYPAD_7 = 0x6C => Keypad7,
    KEYPAD_8 = 0x75 => Keypad8,
    KEYPAD_9 = 0x7D => Keypad9,
    KEYPAD_PERIOD = 0x71 => KeypadDot,
    KEYPAD_PLUS = 0x79 => KeypadPlus,
    KEYPAD_DASH = 0x7B => KeypadMinus,
    KEYPAD_ASTERISK = 0x7C => KeypadTimes,
    KEYPAD_EQUALS = 0x0F => KeypadEqual,
    KEYPAD_COMMA = 0x6D => KeypadComma,

    // 数字キー
    KEY_0 = 0x45 => Digit0,
    KEY_1 = 0x16 => Digit1,
    KEY_2 = 0x1E => Digit2,
    KEY_3 = 0x26 => Digit3,
    KEY_4 = 0x25 => Digit4,
    KEY_5 = 0x2E => Digit5,
    KEY_6 = 0x36 => Digit6,
    KEY_7 = 0x3D => Digit7,
    KEY_8 = 0x3E => Digit8,
    KEY_9 = 0x46 => Digit9,

    // 記号キー
    APOSTROPHE = 0x52 => Apostrophe,
    COMMA = 0x41 => Comma,
    DASH = 0x4E => Minus,
    PERIOD = 0x49 => Dot,
    FORWARD_SLASH = 0x4A => Slash,
    OPEN_QUOTE = 0x0E => Backtick,
    SEMICOLON = 0x4C => Semicolon,
    BACKSLASH = 0x5D => Backslash,
    OPEN_SQUARE_BRACKET = 0x54 => OpenBracket,
    CLOSE_SQUARE_BRACKET = 0x5B => CloseBracket,
    EQUAL = 0x55 => Equal,
    EUROPE_2 = 0x61 => Europe2,

    // 文字キー
    A = 0x1C => A,
    B = 0x32 => B,
    C = 0x21 => C,
    D = 0x23 => D,
    E = 0x24 => E,
    F = 0x2B => F,
    G = 0x34 => G,
    H = 0x33 => H,
    I = 0x43 => I,
    J = 0x3B => J,
    K = 0x42 => K,
    L = 0x4B => L,
    M = 0x3A => M,
    N = 0x31 => N,
    O = 0x44 => O,
    P = 0x4D => P,
    Q = 0x15 => Q,
    R = 0x2D => R,
    S = 0x1B => S,
    T = 0x2C => T,
    U = 0x3C => U,
    V = 0x2A => V,
    W = 0x1D => W,
    X = 0x22 => X,
    Y = 0x35 => Y,
    Z = 0x1A => Z,

    // ファンクションキー
    F1 = 0x05 => F1,
    F2 = 0x06 => F2,
    F3 = 0x04 => F3,
    F4 = 0x0C => F4,
    F5 = 0x03 => F5,
    F6 = 0x0B => F6,
    F7 = 0x83 => F7,
    F8 = 0x0A => F8,
    F9 = 0x01 => F9,
    F10 = 0x09 => F10,
    F11 = 0x78 => F11,
    F12 = 0x07 => F12,
    F13 = 0x08 => F13,
    F14 = 0x10 => F14,
    F15 = 0x18 => F15,
    F16 = 0x20 => F16,
    F17 = 0x28 => F17,
    F18 = 0x30 => F18,
    F19 = 0x38 => F19,
    F20 = 0x40 => F20,
    F21 = 0x48 => F21,
    F22 = 0x50 => F22,
    F23 = 0x57 => F23,
    // Lang5 も 0x5F とする資料があるが、ここでは F24 を採る
    F24 = 0x5F => F24,

    // 各国語キー
    INTL_1 = 0x51 => Intl1,
    INTL_2 = 0x13 => Intl2,
    INTL_3 = 0x6A => Intl3,
    INTL_4 = 0x64 => Intl4,
    INTL_5 = 0x67 => Intl5,
    LANG_1 = 0xF2 => Lang1,
    LANG_2 = 0xF1 => Lang2,
    LANG_3 = 0x63 => Lang3,
    LANG_4 = 0x62 => Lang4,
}
