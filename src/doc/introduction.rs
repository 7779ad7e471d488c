/*!
# Introductory Tutorial for Breakable Scopes

Plenty of code is a list of steps where any step may discover that the
rest is pointless. The usual ways out are nested `if` blocks, a helper
function with early `return`, or a flag checked after every step. A
breakable scope is a block you can simply leave.

```
use breakable_scope::breakable_scope;

let input = "42";
let mut answer = None;
breakable_scope! {
    {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            break;
        }
        let n: i32 = match trimmed.parse() {
            Ok(n) => n,
            Err(_) => break,
        };
        answer = Some(n);
    } else {
        answer = Some(-1);
    }
}
assert_eq!(answer, Some(42));
```

The first block is the body. The `else` block is the fallback. When the
body says `break`, the remaining statements of the body are skipped and
the fallback runs. When the body reaches its end, the fallback is skipped.
Either way control continues with the statement after the whole scope,
and every variable declared before the scope is still in reach.

There is a second way out. `continue` also skips the remaining statements
of the body, but it skips the fallback too. Use it when leaving early is
not a failure.

```
use breakable_scope::breakable_scope;

let mut log = Vec::new();
for word in ["", "ok", "bad"].iter() {
    breakable_scope! {
        {
            if word.is_empty() {
                continue;
            }
            if *word == "bad" {
                break;
            }
            log.push("accepted");
        } else {
            log.push("rejected");
        }
    }
}
assert_eq!(log, ["accepted", "rejected"]);
```

Notice that the `continue` above did not advance the `for` loop. The
`for` loop ran three times either way; `continue` only ended the scope.
Inside a breakable scope, both keywords belong to the scope. To reach
an enclosing loop, give that loop a label.

```
use breakable_scope::breakable_scope;

let mut seen = 0;
'words: for word in ["a", "stop", "b"].iter() {
    breakable_scope! {
        {
            if *word == "stop" {
                break 'words;
            }
            seen += 1;
        }
    }
}
assert_eq!(seen, 1);
```

The `else` block is optional, as shown in the last example. Without one,
`break` and `continue` behave the same.

Continue with [Chapter 1](../__Chapter_1/index.html) for the exact rules.
*/
