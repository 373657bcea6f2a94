use super::Value;

/// Safely drops `value` in heap memory.
///
/// This avoids stack overflows with deeply nested types.
pub fn safely(value: Value) {
    match value {
        Value::Map(..) | Value::CompositeList(..) => {}
        _ => return,
    }

    let mut stack = Vec::new();
    stack.push(value);
    while let Some(value) = stack.pop() {
        match value {
            Value::Map(map) => {
                for (key, child) in map {
                    stack.push(key);
                    stack.push(child);
                }
            }
            Value::CompositeList(list) => {
                for child in list {
                    stack.push(child);
                }
            }
            _ => (),
        }
    }
}
