//! Async sleep that works in the browser and on the server

use std::time::Duration;

#[cfg(not(any(feature = "server", feature = "web")))]
compile_error!("enable either the `server` or the `web` feature");

#[cfg(feature = "web")]
pub async fn sleep(duration: Duration) {
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) =
                    window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                {
                    log::warn!("Could not schedule timeout: {:?}", e);
                }
            }
            None => log::warn!("No browser window, timer will never fire"),
        }
    });
    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
        log::warn!("Timeout promise rejected: {:?}", e);
    }
}

#[cfg(all(feature = "server", not(feature = "web")))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
