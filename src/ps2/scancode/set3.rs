// ============================================================================
// src/ps2/scancode/set3.rs - Scan Code Set 3 (reference)
// ============================================================================
//!
//! スキャンコードセット3
//!
//! 全キーが1バイトで、プレフィックスが存在しない。単純だが対応機種が
//! 少ないため、デコーダは使わない。古いPS/2キーボードを入力装置として
//! 組み込む場合の参照用。

scancode_table! {
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

    // テンキー
    KEYPAD_SLASH = 0x77 => KeypadDivide,
    KEYPAD_ASTERISK = 0x7E => KeypadTimes,
    KEYPAD_DASH = 0x84 => KeypadMinus,
    KEYPAD_PLUS = 0x7C => KeypadPlus,
    KEYPAD_ENTER = 0x79 => KeypadEnter,
    KEYPAD_PERIOD = 0x71 => KeypadDot,
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

    // ファンクションキー
    F1 = 0x07 => F1,
    F2 = 0x0F => F2,
    F3 = 0x17 => F3,
    F4 = 0x1F => F4,
    F5 = 0x27 => F5,
    F6 = 0x2F => F6,
    F7 = 0x37 => F7,
    F8 = 0x3F => F8,
    F9 = 0x47 => F9,
    F10 = 0x4F => F10,
    F11 = 0x56 => F11,
    F12 = 0x5E => F12,

    // ナビゲーションキー
    INSERT = 0x67 => Insert,
    HOME = 0x6E => Home,
    PAGE_UP = 0x6F => PageUp,
    DELETE = 0x64 => Delete,
    END = 0x65 => End,
    PAGE_DOWN = 0x6D => PageDown,
    UP_ARROW = 0x63 => UpArrow,
    LEFT_ARROW = 0x61 => LeftArrow,
    DOWN_ARROW = 0x60 => DownArrow,
    RIGHT_ARROW = 0x6A => RightArrow,

    // ロック・修飾キー
    NUM_LOCK = 0x76 => NumLock,
    CAPS_LOCK = 0x14 => CapsLock,
    SCROLL_LOCK = 0x5F => ScrollLock,
    LEFT_SHIFT = 0x12 => LeftShift,
    LEFT_CTRL = 0x11 => LeftCtrl,
    LEFT_GUI = 0x8B => LeftGui,
    LEFT_ALT = 0x19 => LeftAlt,
    RIGHT_SHIFT = 0x59 => RightShift,
    RIGHT_CTRL = 0x58 => RightCtrl,
    RIGHT_GUI = 0x8C => RightGui,
    RIGHT_ALT = 0x39 => RightAlt,

    // 特殊キー
    BACKSPACE = 0x66 => Backspace,
    TAB = 0x0D => Tab,
    SPACE = 0x29 => Space,
    ENTER = 0x5A => Enter,
    ESCAPE = 0x08 => Escape,
    PRINT_SCREEN = 0x57 => PrintScreen,
    PAUSE = 0x62 => Pause,
    MENU = 0x8D => Menu,

    // 記号キー
    OPEN_QUOTE = 0x0E => Backtick,
    DASH = 0x4E => Minus,
    EQUAL = 0x55 => Equal,
    BACKSLASH = 0x5C => Backslash,
    OPEN_SQUARE_BRACKET = 0x54 => OpenBracket,
    CLOSE_SQUARE_BRACKET = 0x5B => CloseBracket,
    SEMICOLON = 0x4C => Semicolon,
    APOSTROPHE = 0x52 => Apostrophe,
    COMMA = 0x41 => Comma,
    PERIOD = 0x49 => Dot,
    SLASH = 0x4A => Slash,
}
