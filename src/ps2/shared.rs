// ============================================================================
// src/ps2/shared.rs - Lock-protected Decoder
// ============================================================================

use spin::Mutex;

use super::keyboard::KeyboardDecoder;
use super::keycode::{KeyEvent, Modifiers};

/// スピンロックで保護したデコーダ
///
/// `static`に置けるので、割り込みハンドラでバイトを流し込み、
/// タスク側で修飾キー状態を読む、といった使い方ができる。
/// ロックで直列化されるため、デコーダを同時に操作する呼び出し元は常に1つ。
///
/// ```rust
/// use ps2_scancode::SharedDecoder;
///
/// static KEYBOARD: SharedDecoder = SharedDecoder::new();
///
/// fn keyboard_interrupt_handler(data: u8) {
///     if let Some(event) = KEYBOARD.consume(data) {
///         // イベントをホスト側のキューへ
///         let _ = event;
///     }
/// }
/// # keyboard_interrupt_handler(0x1C);
/// ```
pub struct SharedDecoder {
    inner: Mutex<KeyboardDecoder>,
}

impl SharedDecoder {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(KeyboardDecoder::new()),
        }
    }

    /// 生バイトを1つ処理
    pub fn consume(&self, raw: u8) -> Option<KeyEvent> {
        self.inner.lock().consume(raw)
    }

    /// プレフィックス状態を初期化（修飾キー状態は保持）
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// 修飾キー状態を消去
    pub fn clear_modifiers(&self) {
        self.inner.lock().clear_modifiers();
    }

    /// 現在の修飾キー状態
    pub fn modifiers(&self) -> Modifiers {
        self.inner.lock().modifiers()
    }

    /// ロックを保持したままデコーダを操作
    pub fn with<R>(&self, f: impl FnOnce(&mut KeyboardDecoder) -> R) -> R {
        let mut decoder = self.inner.lock();
        f(&mut *decoder)
    }
}

impl Default for SharedDecoder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// テスト
// ============================================================================
