//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::render_text_to_svg;

/// Render note text to SVG.
///
/// Called from Kotlin as:
///   external fun renderText(text: String): String?
#[no_mangle]
pub extern "system" fn Java_com_grandstaff_app_GrandStaff_renderText(
    mut env: JNIEnv,
    _class: JClass,
    text: JString,
) -> jstring {
    let text: String = match env.get_string(&text) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match render_text_to_svg(&text) {
        Some(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        None => std::ptr::null_mut(),
    }
}
