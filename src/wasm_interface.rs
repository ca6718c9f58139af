//! WebAssembly interface for calling seqkit from JavaScript.
//!
//! Sequences cross the boundary as JSON text: each export parses its array
//! arguments, runs the matching seqkit function and returns the result
//! serialized back to JSON. Errors reach JavaScript as thrown strings.
//!
//! Export names follow the JavaScript convention
//! (`getIntervalArray`, `removeFalsyValues`, ...).
//!
//! # Example (JavaScript)
//! ```javascript
//! import init, { shiftArray } from "./seqkit.js";
//! await init();
//! JSON.parse(shiftArray("[1,2,3,4,5]", 2)); // [4, 5, 1, 2, 3]
//! ```

use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

use crate::{
    aggregate, filter, format, generate, ordering, reshape, search, Nested, Result, SeqKitError,
    Value,
};

impl From<SeqKitError> for JsValue {
    fn from(err: SeqKitError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

type JsResult<T> = std::result::Result<T, JsValue>;

fn parse<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Install the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = getIntervalArray)]
pub fn get_interval_array(start: i32, end: i32) -> JsResult<String> {
    Ok(render(&generate::interval(start.into(), end.into())?)?)
}

#[wasm_bindgen(js_name = sumArrays)]
pub fn sum_arrays(arr1: &str, arr2: &str) -> JsResult<String> {
    let a: Vec<f64> = parse(arr1)?;
    let b: Vec<f64> = parse(arr2)?;
    Ok(render(&aggregate::sum_arrays(&a, &b))?)
}

/// Returns `-1` when the value is absent.
#[wasm_bindgen(js_name = findElement)]
pub fn find_element(arr: &str, value: &str) -> JsResult<i32> {
    let seq: Vec<Value> = parse(arr)?;
    let value: Value = parse(value)?;
    Ok(search::index_of(&seq, &value).map_or(-1, |i| i as i32))
}

#[wasm_bindgen(js_name = findAllOccurrences)]
pub fn find_all_occurrences(arr: &str, item: &str) -> JsResult<usize> {
    let seq: Vec<Value> = parse(arr)?;
    let item: Value = parse(item)?;
    Ok(search::count_occurrences(&seq, &item))
}

#[wasm_bindgen(js_name = removeFalsyValues)]
pub fn remove_falsy_values(arr: &str) -> JsResult<String> {
    let seq: Vec<Value> = parse(arr)?;
    Ok(render(&filter::remove_falsy(&seq))?)
}

#[wasm_bindgen(js_name = getStringsLength)]
pub fn get_strings_length(arr: &str) -> JsResult<String> {
    let seq: Vec<String> = parse(arr)?;
    Ok(render(&format::string_lengths(&seq))?)
}

#[wasm_bindgen(js_name = getAverage)]
pub fn get_average(arr: &str) -> JsResult<f64> {
    let seq: Vec<f64> = parse(arr)?;
    Ok(aggregate::average(&seq))
}

#[wasm_bindgen(js_name = isSameLength)]
pub fn is_same_length(arr: &str) -> JsResult<bool> {
    let seq: Vec<String> = parse(arr)?;
    Ok(filter::is_same_length(&seq))
}

#[wasm_bindgen(js_name = isValueEqualsIndex)]
pub fn is_value_equals_index(arr: &str) -> JsResult<bool> {
    let seq: Vec<i64> = parse(arr)?;
    Ok(search::has_value_equal_to_index(&seq))
}

/// Returns the new array; the input is left untouched.
#[wasm_bindgen(js_name = insertItem)]
pub fn insert_item(arr: &str, item: &str, index: usize) -> JsResult<String> {
    let seq: Vec<Value> = parse(arr)?;
    let item: Value = parse(item)?;
    Ok(render(&reshape::insert_at(&seq, item, index)?)?)
}

#[wasm_bindgen(js_name = getHead)]
pub fn get_head(arr: &str, n: usize) -> JsResult<String> {
    let seq: Vec<Value> = parse(arr)?;
    Ok(render(&reshape::head(&seq, n))?)
}

#[wasm_bindgen(js_name = getTail)]
pub fn get_tail(arr: &str, n: usize) -> JsResult<String> {
    let seq: Vec<Value> = parse(arr)?;
    Ok(render(&reshape::tail(&seq, n))?)
}

#[wasm_bindgen(js_name = doubleArray)]
pub fn double_array(arr: &str) -> JsResult<String> {
    let seq: Vec<Value> = parse(arr)?;
    Ok(render(&reshape::double_array(&seq))?)
}

#[wasm_bindgen(js_name = toStringList)]
pub fn to_string_list(arr: &str) -> JsResult<String> {
    let seq: Vec<Value> = parse(arr)?;
    Ok(format::join(&seq))
}

#[wasm_bindgen(js_name = distinct)]
pub fn distinct(arr: &str) -> JsResult<String> {
    let seq: Vec<Value> = parse(arr)?;
    Ok(render(&filter::distinct_values(&seq))?)
}

#[wasm_bindgen(js_name = createNDimensionalArray)]
pub fn create_n_dimensional_array(n: usize, size: usize) -> JsResult<String> {
    Ok(render(&generate::n_dimensional_zeros(n, size)?)?)
}

#[wasm_bindgen(js_name = flattenArray)]
pub fn flatten_array(nested_array: &str) -> JsResult<String> {
    let seq: Vec<Nested<Value>> = parse(nested_array)?;
    Ok(render(&reshape::flatten(&seq))?)
}

#[wasm_bindgen(js_name = calculateBalance)]
pub fn calculate_balance(arr: &str) -> JsResult<f64> {
    let pairs: Vec<(f64, f64)> = parse(arr)?;
    Ok(aggregate::calculate_balance(&pairs))
}

#[wasm_bindgen(js_name = createChunks)]
pub fn create_chunks(arr: &str, chunk_size: usize) -> JsResult<String> {
    let seq: Vec<Value> = parse(arr)?;
    Ok(render(&reshape::chunk(&seq, chunk_size)?)?)
}

#[wasm_bindgen(js_name = generateOdds)]
pub fn generate_odds(len: usize) -> JsResult<String> {
    Ok(render(&generate::generate_odds(len))?)
}

#[wasm_bindgen(js_name = getElementByIndices)]
pub fn get_element_by_indices(arr: &str, indices: &str) -> JsResult<String> {
    let seq: Vec<Nested<Value>> = parse(arr)?;
    let indices: Vec<usize> = parse(indices)?;
    Ok(render(ordering::get_by_indices(&seq, &indices)?)?)
}

#[wasm_bindgen(js_name = getFalsyValuesCount)]
pub fn get_falsy_values_count(arr: &str) -> JsResult<usize> {
    let seq: Vec<Value> = parse(arr)?;
    Ok(filter::falsy_count(&seq))
}

#[wasm_bindgen(js_name = getIdentityMatrix)]
pub fn get_identity_matrix(n: usize) -> JsResult<String> {
    Ok(render(&generate::identity_matrix(n)?)?)
}

#[wasm_bindgen(js_name = getIndicesOfOddNumbers)]
pub fn get_indices_of_odd_numbers(numbers: &str) -> JsResult<String> {
    let seq: Vec<i64> = parse(numbers)?;
    Ok(render(&search::indices_of_odd(&seq))?)
}

#[wasm_bindgen(js_name = getHexRGBValues)]
pub fn get_hex_rgb_values(arr: &str) -> JsResult<String> {
    let seq: Vec<u32> = parse(arr)?;
    Ok(render(&format::hex_rgb(&seq)?)?)
}

#[wasm_bindgen(js_name = getMaxItems)]
pub fn get_max_items(arr: &str, n: usize) -> JsResult<String> {
    let seq: Vec<f64> = parse(arr)?;
    Ok(render(&ordering::max_items(&seq, n))?)
}

#[wasm_bindgen(js_name = findCommonElements)]
pub fn find_common_elements(arr1: &str, arr2: &str) -> JsResult<String> {
    let a: Vec<Value> = parse(arr1)?;
    let b: Vec<Value> = parse(arr2)?;
    Ok(render(&search::common_elements(&a, &b))?)
}

#[wasm_bindgen(js_name = findLongestIncreasingSubsequence)]
pub fn find_longest_increasing_subsequence(nums: &str) -> JsResult<usize> {
    let seq: Vec<f64> = parse(nums)?;
    Ok(ordering::longest_increasing_run(&seq))
}

#[wasm_bindgen(js_name = propagateItemsByPositionIndex)]
pub fn propagate_items_by_position_index(arr: &str) -> JsResult<String> {
    let seq: Vec<Value> = parse(arr)?;
    Ok(render(&ordering::propagate_by_index(&seq))?)
}

#[wasm_bindgen(js_name = shiftArray)]
pub fn shift_array(arr: &str, n: i32) -> JsResult<String> {
    let seq: Vec<Value> = parse(arr)?;
    Ok(render(&reshape::shift(&seq, n as isize))?)
}

#[wasm_bindgen(js_name = sortDigitNamesByNumericOrder)]
pub fn sort_digit_names_by_numeric_order(arr: &str) -> JsResult<String> {
    let seq: Vec<String> = parse(arr)?;
    Ok(render(&ordering::sort_digit_names(&seq)?)?)
}

#[wasm_bindgen(js_name = swapHeadAndTail)]
pub fn swap_head_and_tail(arr: &str) -> JsResult<String> {
    let seq: Vec<Value> = parse(arr)?;
    Ok(render(&reshape::swap_head_and_tail(&seq))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_array_json() {
        assert_eq!(shift_array("[1,2,3,4,5]", 2).unwrap(), "[4,5,1,2,3]");
        assert_eq!(shift_array(r#"["a","b","c","d"]"#, -1).unwrap(), r#"["b","c","d","a"]"#);
    }

    #[test]
    fn test_calculate_balance_pairs() {
        assert_eq!(calculate_balance("[[10,8],[5,1]]").unwrap(), 6.0);
        assert_eq!(calculate_balance("[]").unwrap(), 0.0);
    }

    #[test]
    fn test_to_string_list_plain_text() {
        assert_eq!(
            to_string_list(r#"[0,false,"cat",null,true,"",[1,2]]"#).unwrap(),
            "0,false,cat,,true,,1,2"
        );
    }

    #[test]
    fn test_get_element_by_indices_json() {
        assert_eq!(
            get_element_by_indices("[[[1,2,3]]]", "[0,0,1]").unwrap(),
            "2"
        );
        assert_eq!(
            get_element_by_indices(r#"[["a",["b"]]]"#, "[0,1]").unwrap(),
            r#"["b"]"#
        );
    }

    #[test]
    fn test_mixed_arrays_round_trip() {
        assert_eq!(
            remove_falsy_values(r#"[0,false,"cat",null,true,""]"#).unwrap(),
            r#"["cat",true]"#
        );
        assert_eq!(
            flatten_array(r#"[1,["a",[null]],2]"#).unwrap(),
            r#"[1,"a",null,2]"#
        );
        assert_eq!(create_chunks("[1,2,3]", 2).unwrap(), "[[1,2],[3]]");
        assert_eq!(find_element(r#"[1,"x",3]"#, r#""x""#).unwrap(), 1);
        assert_eq!(find_element("[1,2]", "5").unwrap(), -1);
    }

    #[test]
    fn test_numeric_exports() {
        assert_eq!(get_interval_array(-2, 2).unwrap(), "[-2,-1,0,1,2]");
        assert_eq!(get_average("[1.115]").unwrap(), 1.11);
        assert_eq!(get_identity_matrix(2).unwrap(), "[[1,0],[0,1]]");
        assert_eq!(get_hex_rgb_values("[0,16777215]").unwrap(), r##"["#000000","#FFFFFF"]"##);
    }
}
