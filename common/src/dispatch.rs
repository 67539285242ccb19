//! 行アクションのディスパッチャ
//!
//! ドキュメントに1つだけリスナーを置き、クリック対象から最も近いマーカー付き要素を
//! 探して登録済みのコールバックへ渡す。後から追加された行にも効く。

use crate::page::ActionTrigger;

type Handler<T> = Box<dyn Fn(&T)>;

pub struct ActionDispatcher<T> {
    handlers: Vec<(String, Handler<T>)>,
}

impl<T> Default for ActionDispatcher<T> {
    fn default() -> Self {
        Self { handlers: Vec::new() }
    }
}

impl<T: ActionTrigger> ActionDispatcher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `marker` クラスを持つ要素のクリックで `handler` を呼ぶ
    pub fn register<H>(&mut self, marker: impl Into<String>, handler: H)
    where
        H: Fn(&T) + 'static,
    {
        self.handlers.push((marker.into(), Box::new(handler)));
    }

    /// 呼び出したハンドラ数を返す
    pub fn dispatch(&self, target: &T) -> usize {
        let mut handled = 0;
        for (marker, handler) in &self.handlers {
            if let Some(trigger) = target.closest(marker) {
                handler(&trigger);
                handled += 1;
            }
        }
        handled
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T> std::fmt::Debug for ActionDispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let markers: Vec<&str> = self.handlers.iter().map(|(m, _)| m.as_str()).collect();
        f.debug_struct("ActionDispatcher").field("markers", &markers).finish()
    }
}
