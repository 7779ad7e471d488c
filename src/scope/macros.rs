/// Runs a block that may be left early, with an optional `else` block
/// for when it was.
///
/// Inside the body, `break` abandons the rest of the body and runs the
/// `else` block. `continue` abandons the rest of the body and skips the
/// `else` block. A body that reaches its end also skips the `else` block.
///
/// ```
/// # use breakable_scope::breakable_scope;
/// fn parse_port(s: &str) -> u16 {
///     let mut port = 0;
///     breakable_scope! {
///         {
///             if s.is_empty() {
///                 continue;
///             }
///             port = match s.parse() {
///                 Ok(p) => p,
///                 Err(_) => break,
///             };
///             if port < 1024 {
///                 break;
///             }
///         } else {
///             port = 8080;
///         }
///     }
///     port
/// }
/// assert_eq!(parse_port("9000"), 9000);
/// assert_eq!(parse_port("http"), 8080);
/// assert_eq!(parse_port("80"), 8080);
/// assert_eq!(parse_port(""), 0);
/// ```
///
/// Both keywords bind to the innermost breakable scope, the same way they
/// bind to the innermost loop. The `else` block is a scope of its own:
/// `break` or `continue` there only ends the `else` block.
///
/// Unreachable-code warnings after an exit inside either block are
/// silenced.
///
/// The body must be a `()` block:
///
/// ```compile_fail
/// # use breakable_scope::breakable_scope;
/// breakable_scope! {
///     { 42 }
/// }
/// ```
#[macro_export]
macro_rules! breakable_scope {
    ($body:block else $fallback:block) => {{
        let mut marker = $crate::scope::Marker::new();
        loop {
            #![allow(unreachable_code)]
            if !marker.enter() {
                break;
            }
            $body
            marker.complete();
            break;
        }
        if marker.settle().runs_fallback() {
            let mut fallback = $crate::scope::Marker::new();
            loop {
                #![allow(unreachable_code)]
                if !fallback.enter() {
                    break;
                }
                $fallback
                fallback.complete();
                break;
            }
        }
    }};
    ($body:block) => {
        $crate::breakable_scope!($body else {})
    };
}
