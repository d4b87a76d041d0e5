use std::{
    cell::Cell,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use futures_util::future::FusedFuture;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use crate::error::{dom_error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// HtmlImageElement経由で画像を読み込むFuture
///
/// onerrorも待つので、読み込めない画像はエラーで解決する
pub struct ImageLoader {
    image: HtmlImageElement,
    src: String,
    state: Rc<Cell<LoadState>>,
    // jsのコールバックを保持するための変数
    onload: Option<Closure<dyn FnMut()>>,
    onerror: Option<Closure<dyn FnMut()>>,
}

impl ImageLoader {
    /// 読み込む画像のURLを指定して読み込みを開始する
    pub fn new(src: impl AsRef<str>) -> Result<Self> {
        let image =
            HtmlImageElement::new().map_err(|_| JsError::new("failed to create image element"))?;
        let src = src.as_ref().to_owned();
        image.set_src(&src);
        Ok(Self {
            image,
            src,
            state: Rc::new(Cell::new(LoadState::Loading)),
            onload: None,
            onerror: None,
        })
    }

    fn callback(&self, waker: std::task::Waker, next: LoadState) -> Closure<dyn FnMut()> {
        let state = self.state.clone();
        Closure::wrap(Box::new(move || {
            state.set(next);
            waker.wake_by_ref();
        }) as Box<dyn FnMut()>)
    }

    // 壊れた画像もcompleteになるので、サイズで判定する
    fn result(&self) -> Result<HtmlImageElement> {
        if self.image.natural_width() == 0 {
            Err(dom_error("Failed to load image", &self.src))
        } else {
            Ok(self.image.clone())
        }
    }
}

impl Future for ImageLoader {
    type Output = Result<HtmlImageElement>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context) -> Poll<Self::Output> {
        match self.state.get() {
            LoadState::Loaded => return Poll::Ready(self.result()),
            LoadState::Failed => {
                return Poll::Ready(Err(dom_error("Failed to load image", &self.src)))
            }
            LoadState::Loading => {}
        }
        // キャッシュ済みの画像はcompleteになっている
        if self.image.complete() {
            self.state.set(LoadState::Loaded);
            return Poll::Ready(self.result());
        }

        let onload = self.callback(cx.waker().clone(), LoadState::Loaded);
        let onerror = self.callback(cx.waker().clone(), LoadState::Failed);
        self.image.set_onload(Some(onload.as_ref().unchecked_ref()));
        self.image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        self.onload = Some(onload);
        self.onerror = Some(onerror);
        Poll::Pending
    }
}

impl FusedFuture for ImageLoader {
    fn is_terminated(&self) -> bool {
        self.state.get() != LoadState::Loading
    }
}

impl Drop for ImageLoader {
    fn drop(&mut self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}
