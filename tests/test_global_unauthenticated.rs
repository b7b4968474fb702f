//! The process-wide façade before `auth` has ever been called.
//!
//! Kept in its own test binary so no other test can authenticate the
//! singleton first.

use github_discussions::global;
use github_discussions::types::{
    DiscussionCategoryId, DiscussionNumber, QueryByCategoryIdParams, QueryByCategoryNameParams,
    QueryByNumberParams, SearchParams,
};

#[tokio::test]
async fn test_global_operations_fail_before_auth() {
    assert!(!global::is_authenticated());

    let err = global::query_categories().await.unwrap_err();
    assert!(err.is_not_authenticated());

    let err = global::query_by_category_id(QueryByCategoryIdParams::new(
        DiscussionCategoryId::new("DIC_kwDOA2"),
    ))
    .await
    .unwrap_err();
    assert!(err.is_not_authenticated());

    let err = global::query_by_category_name(QueryByCategoryNameParams::new("Q&A"))
        .await
        .unwrap_err();
    assert!(err.is_not_authenticated());

    let err = global::query_by_number(QueryByNumberParams::new(DiscussionNumber::new(1)))
        .await
        .unwrap_err();
    assert!(err.is_not_authenticated());

    let err = global::query_labels().await.unwrap_err();
    assert!(err.is_not_authenticated());

    let err = global::search(SearchParams::query("performance"))
        .await
        .unwrap_err();
    assert!(err.is_not_authenticated());
    assert_eq!(
        err.to_string(),
        "Please call auth() first to configure the client"
    );
}
