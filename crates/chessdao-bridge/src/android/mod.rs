// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Targets `aarch64-linux-android` / `armv7-linux-androideabi`. The Capacitor
// `MainActivity` loads this library and forwards two lifecycle callbacks:
//
//   onStart()      -> nativeOnStart(webView, getIntent())
//   onNewIntent(i) -> setIntent(i); nativeOnNewIntent(webView, i)
//
// `webView` is `getBridge().getWebView()` and may be null. Both calls run on
// the UI thread, which is also the only thread allowed to touch the WebView.
// See `ANDROID-INTEGRATION.md` for the Java side.

#![cfg(target_os = "android")]

use std::sync::{Mutex, OnceLock};

use jni::objects::{GlobalRef, JClass, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};

use chessdao_core::error::{Result, ShellError};
use chessdao_core::{ActivationRequest, RelayOutcome, ShellConfig};
use chessdao_relay::{DeeplinkRelay, DocumentHost};

use crate::traits::*;

// ---------------------------------------------------------------------------
// JNI helpers
// ---------------------------------------------------------------------------

/// Map any `jni::errors::Error` into `ShellError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> ShellError {
    ShellError::Bridge(format!("{context}: {e}"))
}

/// The process `JavaVM`, as registered by the NDK glue.
fn java_vm() -> Result<JavaVM> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` is the `JavaVM*` set by the NDK glue code and stays
    // valid for the lifetime of the process.
    unsafe { JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| jni_err("failed to obtain JavaVM", e))
}

/// The hosting `Activity` as a [`JObject`].
fn activity() -> Result<JObject<'static>> {
    let ptr = ndk_context::android_context().context();
    if ptr.is_null() {
        return Err(ShellError::Bridge(
            "Android context is null, activity not initialised".into(),
        ));
    }
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the hosting Activity.
    Ok(unsafe { JObject::from_raw(ptr.cast()) })
}

/// Convert a possibly-null `java.lang.String` into a Rust string.
fn java_string(env: &mut JNIEnv<'_>, obj: JObject<'_>) -> Result<Option<String>> {
    if obj.is_null() {
        return Ok(None);
    }
    let value: String = env
        .get_string(&JString::from(obj))
        .map_err(|e| jni_err("get_string", e))?
        .into();
    Ok(Some(value))
}

/// `intent.getData().toString()`, or None when the intent or its data is null.
fn intent_data_uri(env: &mut JNIEnv<'_>, intent: &JObject<'_>) -> Result<Option<String>> {
    if intent.is_null() {
        return Ok(None);
    }
    let uri: JObject = env
        .call_method(intent, "getData", "()Landroid/net/Uri;", &[])
        .map_err(|e| jni_err("Intent.getData", e))?
        .l()
        .map_err(|e| jni_err("Intent.getData->l", e))?;
    if uri.is_null() {
        return Ok(None);
    }
    let text: JObject = env
        .call_method(&uri, "toString", "()Ljava/lang/String;", &[])
        .map_err(|e| jni_err("Uri.toString", e))?
        .l()
        .map_err(|e| jni_err("Uri.toString->l", e))?;
    java_string(env, text)
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// Android implementation of the platform bridge.
///
/// Zero-sized; the first JNI call happens lazily inside a trait method.
pub struct AndroidBridge;

impl AndroidBridge {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

impl NativeIntent for AndroidBridge {
    /// Reads `activity.getIntent().getData()`.
    fn launch_uri(&self) -> Result<Option<String>> {
        let vm = java_vm()?;
        let mut env = vm
            .attach_current_thread()
            .map_err(|e| jni_err("attach_current_thread", e))?;
        let activity = activity()?;

        let intent: JObject = env
            .call_method(&activity, "getIntent", "()Landroid/content/Intent;", &[])
            .map_err(|e| jni_err("getIntent", e))?
            .l()
            .map_err(|e| jni_err("getIntent->l", e))?;
        intent_data_uri(&mut env, &intent)
    }
}

// ---------------------------------------------------------------------------
// DocumentHost: android.webkit.WebView
// ---------------------------------------------------------------------------

/// The Capacitor `WebView`, pinned with a JNI global reference.
pub struct AndroidWebView {
    vm: JavaVM,
    webview: GlobalRef,
}

impl AndroidWebView {
    /// Wrap a local `WebView` reference. A null reference means the
    /// Capacitor bridge has no web view yet and yields `Ok(None)`.
    pub fn from_local(env: &mut JNIEnv<'_>, webview: &JObject<'_>) -> Result<Option<Self>> {
        if webview.is_null() {
            return Ok(None);
        }
        let vm = env.get_java_vm().map_err(|e| jni_err("get_java_vm", e))?;
        let webview = env
            .new_global_ref(webview)
            .map_err(|e| jni_err("new_global_ref(webView)", e))?;
        Ok(Some(Self { vm, webview }))
    }
}

impl DocumentHost for AndroidWebView {
    /// `webView.loadUrl(url)`. The load itself is asynchronous on the Java
    /// side; this returns once it has been queued.
    fn load_url(&self, url: &str) -> Result<()> {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| jni_err("attach_current_thread", e))?;
        let j_url: JString = env
            .new_string(url)
            .map_err(|e| jni_err("new_string(url)", e))?;
        env.call_method(
            &self.webview,
            "loadUrl",
            "(Ljava/lang/String;)V",
            &[JValue::Object(&j_url)],
        )
        .map_err(|e| jni_err("WebView.loadUrl", e))?;
        Ok(())
    }

    /// `webView.getUrl()`, null before the first page load.
    fn current_url(&self) -> Result<Option<String>> {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| jni_err("attach_current_thread", e))?;
        let url: JObject = env
            .call_method(&self.webview, "getUrl", "()Ljava/lang/String;", &[])
            .map_err(|e| jni_err("WebView.getUrl", e))?
            .l()
            .map_err(|e| jni_err("WebView.getUrl->l", e))?;
        java_string(&mut env, url)
    }
}

// ---------------------------------------------------------------------------
// Lifecycle entry points
// ---------------------------------------------------------------------------

/// One relay per process; it owns the activity's "current intent" slot.
static RELAY: OnceLock<Mutex<DeeplinkRelay>> = OnceLock::new();

fn relay() -> Result<&'static Mutex<DeeplinkRelay>> {
    if let Some(relay) = RELAY.get() {
        return Ok(relay);
    }
    let relay = DeeplinkRelay::new(ShellConfig::default())?;
    Ok(RELAY.get_or_init(|| Mutex::new(relay)))
}

#[derive(Debug, Clone, Copy)]
enum Lifecycle {
    Start,
    NewIntent,
}

fn try_dispatch(
    env: &mut JNIEnv<'_>,
    phase: Lifecycle,
    webview: &JObject<'_>,
    intent: &JObject<'_>,
) -> Result<RelayOutcome> {
    let request = ActivationRequest::new(intent_data_uri(env, intent)?);
    let webview = AndroidWebView::from_local(env, webview)?;
    let host = webview.as_ref().map(|w| w as &dyn DocumentHost);

    let mut relay = relay()?
        .lock()
        .map_err(|_| ShellError::Bridge("relay lock poisoned".into()))?;
    match phase {
        Lifecycle::Start => relay.handle_launch(request, host),
        Lifecycle::NewIntent => relay.handle_resume(request, host),
    }
}

/// Runs the relay and swallows failures: a Java exception must never escape
/// an activity lifecycle callback.
fn dispatch(env: &mut JNIEnv<'_>, phase: Lifecycle, webview: &JObject<'_>, intent: &JObject<'_>) {
    match try_dispatch(env, phase, webview, intent) {
        Ok(RelayOutcome::Navigated { target, .. }) => {
            tracing::info!(?phase, url = %target, "Android: deeplink relayed");
        }
        Ok(RelayOutcome::Skipped(reason)) => {
            tracing::debug!(?phase, %reason, "Android: deeplink ignored");
        }
        Err(e) => {
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }
            tracing::warn!(?phase, error = %e, "Android: deeplink relay failed");
        }
    }
}

/// `private native void nativeOnStart(WebView webView, Intent intent);`
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_chessdao_app_MainActivity_nativeOnStart<'local>(
    mut env: JNIEnv<'local>,
    _activity: JObject<'local>,
    webview: JObject<'local>,
    intent: JObject<'local>,
) {
    dispatch(&mut env, Lifecycle::Start, &webview, &intent);
}

/// `private native void nativeOnNewIntent(WebView webView, Intent intent);`
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_chessdao_app_MainActivity_nativeOnNewIntent<'local>(
    mut env: JNIEnv<'local>,
    _activity: JObject<'local>,
    webview: JObject<'local>,
    intent: JObject<'local>,
) {
    dispatch(&mut env, Lifecycle::NewIntent, &webview, &intent);
}

/// `private static native boolean nativeConfigure(String json);`
///
/// Reconfigures the relay from a JSON `ShellConfig`, keeping the current
/// request. Returns false (and keeps the old config) if the JSON is invalid.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_chessdao_app_MainActivity_nativeConfigure<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    json: JString<'local>,
) -> jni::sys::jboolean {
    match configure(&mut env, json) {
        Ok(()) => jni::sys::JNI_TRUE,
        Err(e) => {
            tracing::warn!(error = %e, "Android: shell configuration rejected");
            jni::sys::JNI_FALSE
        }
    }
}

fn configure(env: &mut JNIEnv<'_>, json: JString<'_>) -> Result<()> {
    let json = java_string(env, json.into())?
        .ok_or_else(|| ShellError::Config("configuration JSON is null".into()))?;
    let config: ShellConfig = serde_json::from_str(&json)?;

    let mut relay = relay()?
        .lock()
        .map_err(|_| ShellError::Bridge("relay lock poisoned".into()))?;
    relay.reconfigure(config)?;
    tracing::info!(scheme = %relay.config().custom_scheme, "Android: shell configured");
    Ok(())
}
