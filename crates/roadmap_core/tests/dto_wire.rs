use chrono::NaiveDate;
use roadmap_core::{
    NewRoadmapElement, Roadmap, RoadmapCategory, RoadmapElementReadResponse,
    RoadmapElementRequest, RoadmapElementResponse,
};
use serde_json::json;

#[test]
fn request_parses_camel_case_payload() {
    let request: RoadmapElementRequest = serde_json::from_value(json!({
        "title": "Learn X",
        "content": "basics",
        "startDate": "2024-01-01",
        "endDate": "2024-02-01"
    }))
    .unwrap();

    assert_eq!(request.title, "Learn X");
    assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
}

#[test]
fn request_rejects_missing_field() {
    let result = serde_json::from_value::<RoadmapElementRequest>(json!({
        "title": "Learn X",
        "content": "basics",
        "startDate": "2024-01-01"
    }));

    let message = result.unwrap_err().to_string();
    assert!(message.contains("endDate"));
}

#[test]
fn responses_mirror_the_element() {
    let roadmap = Roadmap {
        id: 1,
        title: "Backend".to_string(),
    };
    let category = RoadmapCategory {
        id: 2,
        roadmap_id: 1,
        title: "Basics".to_string(),
    };
    let element = NewRoadmapElement::new(
        &roadmap,
        &category,
        "Learn X",
        "basics",
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    )
    .into_persisted(5);

    let full = serde_json::to_value(RoadmapElementResponse::from(&element)).unwrap();
    assert_eq!(
        full,
        json!({
            "id": 5,
            "roadmapId": 1,
            "roadmapCategoryId": 2,
            "title": "Learn X",
            "content": "basics",
            "startDate": "2024-01-01",
            "endDate": "2024-02-01"
        })
    );

    let read = serde_json::to_value(RoadmapElementReadResponse::from(&element)).unwrap();
    assert_eq!(
        read,
        json!({
            "id": 5,
            "title": "Learn X",
            "content": "basics",
            "startDate": "2024-01-01",
            "endDate": "2024-02-01"
        })
    );
}

#[test]
fn parent_records_use_camel_case_keys() {
    let roadmap = Roadmap {
        id: 1,
        title: "Backend".to_string(),
    };
    let category = RoadmapCategory {
        id: 2,
        roadmap_id: 1,
        title: "Basics".to_string(),
    };

    assert_eq!(
        serde_json::to_value(&roadmap).unwrap(),
        json!({ "id": 1, "title": "Backend" })
    );
    assert_eq!(
        serde_json::to_value(&category).unwrap(),
        json!({ "id": 2, "roadmapId": 1, "title": "Basics" })
    );

    let parsed: RoadmapCategory =
        serde_json::from_value(json!({ "id": 2, "roadmapId": 1, "title": "Basics" })).unwrap();
    assert_eq!(parsed, category);
}
