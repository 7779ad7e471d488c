/*!
# Leaving a Scope

Every breakable scope ends in one of three ways.

| Body ends with | Phase | Fallback |
|-|-|-|
| `break` | [`ExitedViaBreak`](crate::Phase::ExitedViaBreak) | runs |
| `continue` | [`ExitedViaContinue`](crate::Phase::ExitedViaContinue) | skipped |
| its last statement | [`Completed`](crate::Phase::Completed) | skipped |

The phase is private to each scope. Nothing outside can observe it except
through what the body and fallback do.

```
use breakable_scope::breakable_scope;

let mut value = 0;
breakable_scope! {
    {
        value = 1;
        break;
        value = 2;
    } else {
        value = 3;
    }
}
assert_eq!(value, 3);
```

## The fallback is a scope too

`break` and `continue` inside the fallback end the fallback. They never
run it a second time and never reach past it.

```
use breakable_scope::breakable_scope;

let mut steps = Vec::new();
breakable_scope! {
    {
        steps.push("body");
        break;
    } else {
        steps.push("fallback");
        continue;
        steps.push("unreachable");
    }
}
steps.push("after");
assert_eq!(steps, ["body", "fallback", "after"]);
```

## Other exits pass through

`return`, `?`, labeled `break` and labeled `continue` naming your own
loops work exactly as they would in a plain block. The fallback does not
run for them.

```
use breakable_scope::breakable_scope;

fn first_even(values: &[i32]) -> Option<i32> {
    breakable_scope! {
        {
            let v = *values.first()?;
            if v % 2 == 0 {
                return Some(v);
            }
            break;
        } else {
            return Some(-1);
        }
    }
    None
}
assert_eq!(first_even(&[4, 5]), Some(4));
assert_eq!(first_even(&[5, 4]), Some(-1));
assert_eq!(first_even(&[]), None);
```

## Mistakes are compile errors

A breakable scope only exists inside `breakable_scope!`. A helper
function called from the body is outside it, so its `break` is an error
like any other `break` outside a loop.

```compile_fail
fn helper() {
    break;
}
```

The scope produces no value. A body that ends in an expression other
than `()` does not compile.

```compile_fail
use breakable_scope::breakable_scope;

breakable_scope! {
    { 1 + 1 }
}
```
*/
