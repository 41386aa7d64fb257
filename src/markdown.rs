use crate::error::Error;

const FENCE: &str = "```";

/// Wrap an encoded payload in the fixed markdown document layout.
///
/// Only the payload varies between runs; the first fenced block in the
/// document is always the payload, which is what `extract_payload` relies on.
pub fn render_document(encoded: &str) -> String {
    format!(
        r#"# Encoded Signatures

> This file contains the Base64-encoded signature document.
>
> **To use:** decode the content of the code block below.

---

## Encoded Content

<!-- Base64 encoded signature document -->

```
{encoded}
```

---

## How to Decode

**Python:**

```python
import base64

with open('signatures.md', 'r') as f:
    encoded = f.read().split('```')[1].strip()

print(base64.b64decode(encoded).decode())
```

**Command Line:**

```bash
sed -n '/^```$/,/^```$/p' signatures.md | sed '1d;$d' | base64 -d
```

---

**Why Base64?** Privacy from casual browsing. Easy to decode when needed.

*Decode locally only. Keep the decoded output out of the public repository.*
"#
    )
}

/// Pull the Base64 payload out of an encoded document.
///
/// The document is split on the triple-backtick fence; the content between
/// the first pair of fences, trimmed, is the payload. Fewer than two fences
/// means there is no complete code block.
pub fn extract_payload(content: &str) -> Result<&str, Error> {
    let mut parts = content.split(FENCE);
    parts.next();
    let payload = parts.next().ok_or(Error::MalformedDocument)?;
    if parts.next().is_none() {
        return Err(Error::MalformedDocument);
    }
    Ok(payload.trim())
}
