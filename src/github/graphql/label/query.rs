/// Labels are assumed to fit in a single page of this size
pub const LABEL_LIMIT: u8 = 100;

/// All labels of a repository ordered by name. Takes a `RepositoryVariable`.
pub fn all_labels_query() -> String {
    format!(
        r#"
      query AllLabels($owner: String!, $name: String!) {{
        repository(owner: $owner, name: $name) {{
          labels(first: {}, orderBy: {{ field: NAME, direction: ASC }}) {{
            nodes {{
              id
              name
              color
            }}
          }}
        }}
      }}
    "#,
        LABEL_LIMIT
    )
}
