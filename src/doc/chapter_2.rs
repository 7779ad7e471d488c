/*!
# Nesting

Breakable scopes nest like loops. An exit belongs to the innermost scope
around it, whether it is written in that scope's body or its fallback.
The outer scope only sees what the inner scope's statements did.

```
use breakable_scope::breakable_scope;

let mut i = 0;
breakable_scope! {
    {
        i = 1;
        breakable_scope! {
            {
                i = 2;
                break;
                i = 3;
            } else {
                i = 4;
                break;
                i = 5;
            }
        }
        assert_eq!(i, 4);
        i = 6;
    } else {
        i = 7;
    }
}
assert_eq!(i, 6);
```

The inner `break` ran the inner fallback. The `break` in the inner
fallback ended that fallback. The outer body then carried on and
completed, so the outer fallback never ran.

A scope may also sit inside a fallback.

```
use breakable_scope::breakable_scope;

let mut trail = String::new();
breakable_scope! {
    {
        trail.push('a');
        break;
    } else {
        breakable_scope! {
            {
                trail.push('b');
                continue;
            } else {
                trail.push('x');
            }
        }
        trail.push('c');
    }
}
assert_eq!(trail, "abc");
```

Each use of the macro gets its own marker, even when several share a
line.

```
use breakable_scope::breakable_scope;

let (mut a, mut b) = (0, 0);
breakable_scope!({ a = 1; break; } else { a += 10; }); breakable_scope!({ b = 1; continue; } else { b += 10; });
assert_eq!((a, b), (11, 1));
```
*/
