/// Join items as an English enumeration with an Oxford comma.
///
/// `[]` → `""`, `[A]` → `"A"`, `[A, B]` → `"A and B"`,
/// `[A, B, C]` → `"A, B, and C"`.
pub fn join_naturally<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}
