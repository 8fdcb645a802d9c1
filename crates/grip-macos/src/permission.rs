//! Accessibility (TCC) trust check.

/// Returns whether this process may control other applications through
/// the accessibility API.
///
/// With `prompt` set, macOS shows its "grant access" dialog when the
/// process is not yet trusted. The dialog is asynchronous; the return
/// value reflects the state before the user answers.
#[cfg(target_os = "macos")]
pub fn is_trusted(prompt: bool) -> bool {
    use core_foundation::base::TCFType;
    use core_foundation::boolean::CFBoolean;
    use core_foundation::dictionary::CFDictionary;
    use core_foundation::string::CFString;

    use crate::ffi::{AXIsProcessTrustedWithOptions, kAXTrustedCheckOptionPrompt};

    // SAFETY: the key is an immutable framework constant.
    let key = unsafe { CFString::wrap_under_get_rule(kAXTrustedCheckOptionPrompt) };
    let value = if prompt {
        CFBoolean::true_value()
    } else {
        CFBoolean::false_value()
    };
    let options = CFDictionary::from_CFType_pairs(&[(key, value)]);
    // SAFETY: `options` is a valid dictionary for the duration of the call.
    unsafe { AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef()) }
}

#[cfg(not(target_os = "macos"))]
pub fn is_trusted(_prompt: bool) -> bool {
    false
}
