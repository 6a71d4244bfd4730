//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use todo_core::{
    HttpMethod, HttpResponse, ListQuery, SortField, SortOrder, Todo, TodoClient, TodoDraft,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Build a `ListQuery` from a vector's query object. Blank strings stand
/// for unset dimensions, exactly as the UI hands them over.
fn parse_query(value: &serde_json::Value) -> ListQuery {
    let status = match value["status"].as_str().unwrap() {
        "" => None,
        s => Some(s.parse().unwrap()),
    };
    let sort = match value["sort"].as_str().unwrap() {
        "" => SortField::None,
        "title" => SortField::Title,
        "status" => SortField::Status,
        other => panic!("unknown sort field: {other}"),
    };
    let order = match value["order"].as_str().unwrap() {
        "asc" => SortOrder::Ascending,
        "desc" => SortOrder::Descending,
        other => panic!("unknown order: {other}"),
    };
    ListQuery {
        status,
        search: value["search"].as_str().unwrap().to_string(),
        sort,
        order,
    }
}

fn parse_pairs(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let query = parse_query(&case["query"]);
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_list_todos(&query);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert_eq!(req.query, parse_pairs(&expected_req["query"]), "{name}: query pairs");
        assert!(req.body.is_none(), "{name}: list requests carry no body");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let todos = c.parse_list_todos(response).unwrap();
        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        let expected_titles: Vec<&str> = case["expected_titles"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t.as_str().unwrap())
            .collect();
        assert_eq!(titles, expected_titles, "{name}: parsed titles");
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: TodoDraft = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_create_todo(&input).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert_eq!(req.headers, parse_pairs(&expected_req["headers"]), "{name}: headers");

        let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let todo = c.parse_create_todo(response).unwrap();
        let expected: Todo = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(todo, expected, "{name}: parsed result");
    }
}

// Sanity check on the default: a fresh query must not filter anything.
#[test]
fn default_query_is_match_all() {
    let req = client().build_list_todos(&ListQuery::default());
    assert!(req.query.is_empty());
}
