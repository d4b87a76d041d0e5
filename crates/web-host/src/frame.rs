//! requestAnimationFrameをFutureとして待つ

use std::{
    cell::Cell,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use futures_util::future::FusedFuture;
use wasm_bindgen::prelude::*;

use crate::{dom::window, error::Result};

/// 描画ループ用のTicker
///
/// `tick().await`で次のフレームのタイムスタンプ(ミリ秒)を受け取る
#[derive(Default)]
pub struct AnimationTicker {
    last: Option<f64>,
}

impl AnimationTicker {
    /// 次のアニメーションフレームを待つ
    pub async fn tick(&mut self) -> Result<f64> {
        let ts = AnimationFrame::new().await?;
        self.last = Some(ts);
        Ok(ts)
    }

    /// 最後に受け取ったタイムスタンプ
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last
    }
}

/// 1回分のrequestAnimationFrame
pub struct AnimationFrame {
    handle: Option<i32>,
    timestamp: Rc<Cell<Option<f64>>>,
    // コールバックが呼ばれるまで保持する
    closure: Option<Closure<dyn FnMut(f64)>>,
    done: bool,
}

impl AnimationFrame {
    pub fn new() -> Self {
        Self {
            handle: None,
            timestamp: Rc::new(Cell::new(None)),
            closure: None,
            done: false,
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Ok(w) = window() {
                let _ = w.cancel_animation_frame(handle);
            }
        }
    }
}

impl Default for AnimationFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Future for AnimationFrame {
    type Output = Result<f64>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context) -> Poll<Self::Output> {
        if let Some(ts) = self.timestamp.get() {
            self.handle = None;
            self.closure = None;
            self.done = true;
            return Poll::Ready(Ok(ts));
        }
        if self.handle.is_some() {
            // 既に登録済み。wakerだけ差し替える
            self.cancel();
        }

        let waker = cx.waker().clone();
        let slot = self.timestamp.clone();
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            slot.set(Some(timestamp));
            waker.wake_by_ref();
        }) as Box<dyn FnMut(f64)>);
        let handle = window()?
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|_| JsError::new("Failed request animation frame"))?;
        self.handle = Some(handle);
        self.closure = Some(closure);
        Poll::Pending
    }
}

impl FusedFuture for AnimationFrame {
    fn is_terminated(&self) -> bool {
        self.done
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        self.cancel();
    }
}
