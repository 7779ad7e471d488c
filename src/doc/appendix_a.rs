/*!
# Closures and Helper Functions

`break` and `continue` cannot leave a closure or a function, so a body
that has to be a closure uses [`run`](crate::run) instead. The body
returns [`scope::Result`](crate::scope::Result) and leaves early with
`Err(Exit::Break)` or `Err(Exit::Continue)`, usually through `?`.

```
use breakable_scope::{ensure, run, skip_if, Exit, Phase};

fn check(name: &str) -> breakable_scope::scope::Result {
    skip_if(name.is_empty())?;
    ensure(name.chars().all(|c| c.is_ascii_alphanumeric()))?;
    if name.len() > 8 {
        return Err(Exit::Break);
    }
    Ok(())
}

let mut rejected = Vec::new();
for name in ["", "ok", "no way", "muchtoolong"].iter() {
    let phase = run(|| check(name), || rejected.push(*name));
    if name.is_empty() {
        assert_eq!(phase, Phase::ExitedViaContinue);
    }
}
assert_eq!(rejected, ["no way", "muchtoolong"]);
```

Unlike the macro, `run` hands back the [`Phase`](crate::Phase) the body
ended in, since a closure has no place to fall through to.
[`attempt`](crate::attempt) is `run` with nothing to fall back on.
*/
