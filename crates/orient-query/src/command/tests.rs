use super::*;
use serde_json::json;

// ==================== Rendering Tests ====================

/// One command of every built-in kind with its tokens and a WHERE clause set.
fn populated_commands() -> Vec<Command> {
    let mut commands = Vec::new();

    let mut command = select(["Profile"]);
    command
        .select(["name", "age"], true)
        .where_("name IN ?", vec!["luke", "leia"])
        .or_where("age > ?", 18)
        .order_by(["age DESC"], true, false)
        .skip(5)
        .limit(10)
        .range("12:0", "12:10");
    commands.push(command);

    let mut command = insert();
    command
        .into_target("Profile")
        .fields(["name"], true)
        .values(["luke"], true);
    commands.push(command);

    let mut command = update("Profile");
    command.set([("name", "luke")], true);
    commands.push(command);
    commands.push(delete("Profile"));
    commands.push(update_add([Value::entry("friends", "#10:0")], "Profile", true));
    commands.push(update_remove([Value::entry("friends", "#10:0")], "Profile", true));
    commands.push(update_put(
        [Value::entry("addresses", Value::entry("home", "#12:0"))],
        "Profile",
        true,
    ));

    for mut command in [grant("READ"), revoke("READ")] {
        command.on("Profile").to("reader");
        commands.push(command);
    }

    commands.push(class_create("Profile"));
    commands.push(class_drop("Profile"));
    commands.push(class_alter("Profile", "SUPERCLASS", "V"));
    for mut command in [
        property_create("friends", Some("LINKLIST"), Some("Profile")),
        property_drop("name"),
    ] {
        command.on("Profile");
        commands.push(command);
    }
    let mut command = property_alter("name");
    command.on("Profile").changing("MAX", 64);
    commands.push(command);

    let mut command = find_references("12:0");
    command.in_classes(["Company"], true);
    commands.push(command);
    let mut command = link("Profile", "friends", "friend_of", true);
    command.link_to("Profile", "@rid");
    commands.push(command);

    commands.push(index_create("name", Some("Profile"), Some("unique")));
    commands.push(index_drop("name", Some("Profile")));
    commands.push(index_count("dictionary"));
    commands.push(index_put("dictionary", "luke", "12:0"));
    commands.push(index_remove("dictionary", "luke", Some(Value::rid("12:0"))));
    commands.push(index_lookup("dictionary"));

    for command in &mut commands {
        command.and_where("@class = ?", "Profile");
    }
    commands
}

#[test]
fn test_render_is_idempotent_for_every_kind() {
    for kind in CommandKind::BUILTIN {
        let command = Command::new(kind);
        assert_eq!(command.raw(), command.raw(), "{kind:?}");
    }
}

#[test]
fn test_populated_render_is_idempotent() {
    let commands = populated_commands();
    for kind in CommandKind::BUILTIN {
        assert!(commands.iter().any(|c| c.kind() == kind), "{kind:?} not covered");
    }

    for command in commands {
        let tokens = command.tokens().clone();
        let first = command.raw();
        assert_eq!(command.raw(), first, "{:?}", command.kind());
        assert_eq!(command.to_string(), first, "{:?}", command.kind());
        assert_eq!(command.tokens(), &tokens, "{:?}", command.kind());
        assert!(!first.contains("  "), "{:?}: {first:?}", command.kind());
    }
}

#[test]
fn test_empty_tokens_leave_no_gaps() {
    for kind in CommandKind::BUILTIN {
        let raw = Command::new(kind).raw();
        assert!(!raw.contains("  "), "{kind:?}: {raw:?}");
        assert_eq!(raw.trim_end(), raw, "{kind:?}");
    }
}

#[test]
fn test_empty_placeholder_between_literals() {
    let mut command = Command::custom("A :X B");
    assert_eq!(command.raw(), "A B");
    command.set_value("X", "x");
    assert_eq!(command.raw(), "A x B");
}

#[test]
fn test_repeated_placeholder_resolves_identically() {
    let mut command = Command::custom(":A = :A");
    command.set_value("A", "x");
    assert_eq!(command.raw(), "x = x");
}

#[test]
fn test_missing_token_renders_empty() {
    let mut command = Command::custom("CREATE CLASS :Class :Cluster");
    command.set_value("Class", "Profile");
    assert_eq!(command.raw(), "CREATE CLASS Profile");
}

#[test]
fn test_dangling_keyword_is_dropped() {
    let mut command = Command::custom("DELETE FROM :Class WHERE :Conditions");
    command.set_value("Class", "V");
    assert_eq!(command.raw(), "DELETE FROM V");
}

#[test]
fn test_rendered_fragments_are_never_trimmed() {
    let mut command = Command::custom("SELECT FROM :Target");
    command.set_value("Target", "OR");
    assert_eq!(command.raw(), "SELECT FROM OR");
}

#[test]
fn test_display_matches_raw() {
    let mut command = select(["Profile"]);
    command.where_("name = ?", "luke");
    assert_eq!(command.to_string(), command.raw());
}

// ==================== Token Tests ====================

#[test]
fn test_tokens_follow_schema() {
    let command = insert();
    let names: Vec<&str> = command.tokens().keys().map(String::as_str).collect();
    assert_eq!(names, [":Target", ":Fields", ":Values"]);
}

#[test]
fn test_set_token_append_and_replace() {
    let mut command = select(["a"]);
    command.from(["b"], true);
    assert_eq!(command.raw(), "SELECT FROM a, b");
    command.from(["c"], false);
    assert_eq!(command.raw(), "SELECT FROM c");
    assert_eq!(command.token("Target"), [Value::from("c")]);
}

#[test]
fn test_unknown_token_is_kept_but_not_rendered() {
    let mut command = class_create("Profile");
    command.set_token("Nope", ["x"], true);
    assert_eq!(command.raw(), "CREATE CLASS Profile");
    assert_eq!(command.token(":Nope"), [Value::from("x")]);
}

#[test]
fn test_formatter_bindings() {
    let put = index_put("dictionary", "luke", "12:0");
    assert_eq!(put.formatter_for("Value"), Formatter::EmbeddedRid);
    assert_eq!(put.formatter_for(":Where"), Formatter::Where);
    assert_eq!(put.formatter_for("Unbound"), Formatter::Regular);

    let custom = Command::custom("FIND REFERENCES :Rid").with_formatter("Rid", Formatter::Rid);
    assert_eq!(custom.formatter_for("Rid"), Formatter::Rid);
    assert_eq!(custom.kind(), CommandKind::Custom);
}

// ==================== WHERE Tests ====================

#[test]
fn test_and_or_keep_call_order() {
    let mut command = select(["Profile"]);
    command
        .where_("a = ?", 1)
        .or_where("b = ?", 2)
        .and_where("c = ?", "x");
    assert_eq!(command.raw(), r#"SELECT FROM Profile WHERE a = 1 OR b = 2 AND c = "x""#);
}

#[test]
fn test_where_starts_fresh() {
    let mut command = select(["Profile"]);
    command.where_("a = ?", 1).where_("b = ?", 2);
    assert_eq!(command.raw(), "SELECT FROM Profile WHERE b = 2");
}

#[test]
fn test_and_where_on_empty_clause_leads() {
    let mut command = select(["Profile"]);
    command.and_where("a = ?", 1);
    assert_eq!(command.raw(), "SELECT FROM Profile WHERE a = 1");
    assert_eq!(
        command.token(WHERE),
        [Value::Condition(Condition::new(None, "a = ?", vec![Value::from(1)]))]
    );
}

#[test]
fn test_reset_where_removes_clause() {
    let mut command = select(["Profile"]);
    command.where_("a = ?", 1).reset_where();
    assert_eq!(command.raw(), "SELECT FROM Profile");
    assert!(command.token(WHERE).is_empty());
}

#[test]
fn test_where_with_list_fills_placeholders() {
    let mut command = select(["Profile"]);
    command.where_("a = ? AND b = ?", vec![Value::from("x"), Value::from(2)]);
    assert_eq!(command.raw(), r#"SELECT FROM Profile WHERE a = "x" AND b = 2"#);
}

#[test]
fn test_where_in_binds_list_as_one_value() {
    let mut command = select(["Profile"]);
    command.where_("name IN ?", vec!["luke", "leia"]);
    assert_eq!(command.raw(), r#"SELECT FROM Profile WHERE name IN ["luke", "leia"]"#);

    command.and_where("age IN ?", vec![18, 19]);
    assert_eq!(
        command.raw(),
        r#"SELECT FROM Profile WHERE name IN ["luke", "leia"] AND age IN [18, 19]"#
    );
}

#[test]
fn test_where_with_empty_list_leaves_no_placeholder() {
    let mut command = select(["Profile"]);
    command.where_("name IN ?", Vec::<Value>::new());
    assert_eq!(command.raw(), "SELECT FROM Profile WHERE name IN []");

    command.where_("a = ? OR b = ?", Vec::<Value>::new());
    assert_eq!(command.raw(), "SELECT FROM Profile WHERE a = [] OR b = []");
    assert!(!command.raw().contains('?'));
}

#[test]
fn test_between() {
    let mut command = select(["Profile"]);
    command.between("age", 18, 30);
    assert_eq!(command.raw(), "SELECT FROM Profile WHERE age BETWEEN 18 AND 30");

    command.reset_where().where_("name = ?", "luke").between("age", 18, 30);
    assert_eq!(
        command.raw(),
        r#"SELECT FROM Profile WHERE name = "luke" AND age BETWEEN 18 AND 30"#
    );
}

#[test]
fn test_where_values_are_filtered() {
    let mut command = select(["Profile"]);
    command.where_("name = ?", r#"x"; DROP CLASS V"#);
    let raw = command.raw();
    assert_eq!(raw, r#"SELECT FROM Profile WHERE name = "x DROP CLASS V""#);
    assert!(!raw.contains(';'));
}

// ==================== Select Tests ====================

#[test]
fn test_select_basic() {
    assert_eq!(select(["Profile"]).raw(), "SELECT FROM Profile");
}

#[test]
fn test_select_projections_where_limit() {
    let mut command = select(["Profile"]);
    command
        .select(["name", "age"], true)
        .where_("age > ?", 18)
        .limit(10);
    assert_eq!(
        command.raw(),
        "SELECT name, age FROM Profile WHERE age > 18 LIMIT 10"
    );
}

#[test]
fn test_select_order_by_first() {
    let mut command = select(["Profile"]);
    command
        .order_by(["name ASC"], true, false)
        .order_by(["age DESC"], true, true);
    assert_eq!(
        command.raw(),
        "SELECT FROM Profile ORDER BY age DESC, name ASC"
    );
}

#[test]
fn test_select_skip_limit_range() {
    let mut command = select(["Profile"]);
    command.skip(5).limit(10);
    assert_eq!(command.raw(), "SELECT FROM Profile SKIP 5 LIMIT 10");

    let mut command = select(["Profile"]);
    command.range("12:0", "12:10");
    assert_eq!(command.raw(), "SELECT FROM Profile RANGE #12:0 #12:10");

    command.range(Some("12:0"), None::<&str>);
    assert_eq!(command.raw(), "SELECT FROM Profile RANGE #12:0");

    command.range(None::<&str>, "12:10");
    assert_eq!(command.raw(), "SELECT FROM Profile");
}

// ==================== Insert / Delete / Update Tests ====================

#[test]
fn test_insert() {
    let mut command = insert();
    command
        .into_target("Profile")
        .fields(["name", "age"], true)
        .values([Value::from("luke"), Value::from(19)], true);
    assert_eq!(
        command.raw(),
        r#"INSERT INTO Profile (name, age) VALUES ("luke", 19)"#
    );
}

#[test]
fn test_insert_into_list_keeps_first() {
    let mut command = insert();
    command.into_target(vec!["Profile", "Other"]);
    assert_eq!(command.token("Target"), [Value::from("Profile")]);
}

#[test]
fn test_delete() {
    let mut command = delete("Profile");
    assert_eq!(command.raw(), "DELETE FROM Profile");
    command.where_("name = ?", "luke");
    assert_eq!(command.raw(), r#"DELETE FROM Profile WHERE name = "luke""#);
}

#[test]
fn test_update_set() {
    let mut command = update("Profile");
    command
        .set([("name", Value::from("luke")), ("age", Value::from(19))], true)
        .where_("@rid = ?", Value::rid("#12:0"));
    assert_eq!(
        command.raw(),
        r#"UPDATE Profile SET name = "luke", age = 19 WHERE @rid = #12:0"#
    );
}

#[test]
fn test_update_add_remove_put() {
    let links = [Value::entry("friends", "#10:0")];
    assert_eq!(
        update_add(links.clone(), "Profile", true).raw(),
        "UPDATE Profile ADD friends = #10:0"
    );
    assert_eq!(
        update_remove(links, "Profile", true).raw(),
        "UPDATE Profile REMOVE friends = #10:0"
    );
    assert_eq!(
        update_put(
            [Value::entry("addresses", Value::entry("home", "#12:0"))],
            "Profile",
            true
        )
        .raw(),
        r#"UPDATE Profile PUT addresses = "home", #12:0"#
    );
}

// ==================== DDL / Credential Tests ====================

#[test]
fn test_grant_and_revoke() {
    let mut command = grant("READ");
    command.on("Profile").to("admin");
    assert_eq!(command.raw(), "GRANT READ ON Profile TO admin");

    let mut command = revoke("READ");
    command.on("Profile").to("admin");
    assert_eq!(command.raw(), "REVOKE READ ON Profile FROM admin");
}

#[test]
fn test_class_statements() {
    assert_eq!(class_create("Profile").raw(), "CREATE CLASS Profile");
    assert_eq!(class_drop("Profile").raw(), "DROP CLASS Profile");
    assert_eq!(
        class_alter("Profile", "SUPERCLASS", "V").raw(),
        "ALTER CLASS Profile SUPERCLASS V"
    );
}

#[test]
fn test_property_statements() {
    let mut command = property_create("name", Some("STRING"), None);
    command.on("Profile");
    assert_eq!(command.raw(), "CREATE PROPERTY Profile.name STRING");

    let mut command = property_create("friends", Some("LINKLIST"), Some("Profile"));
    command.on("Profile");
    assert_eq!(command.raw(), "CREATE PROPERTY Profile.friends LINKLIST Profile");

    let mut command = property_drop("name");
    command.on("Profile");
    assert_eq!(command.raw(), "DROP PROPERTY Profile.name");

    let mut command = property_alter("name");
    command.on("Profile").changing("MIN", 3);
    assert_eq!(command.raw(), "ALTER PROPERTY Profile.name MIN 3");
}

#[test]
fn test_find_references() {
    let mut command = find_references("12:0");
    assert_eq!(command.raw(), "FIND REFERENCES 12:0");
    command.in_classes(["Company", "Person"], true);
    assert_eq!(command.raw(), "FIND REFERENCES 12:0 [Company, Person]");
}

#[test]
fn test_find_references_drops_invalid_rid() {
    assert_eq!(find_references("nope").raw(), "FIND REFERENCES");
}

#[test]
fn test_link() {
    let mut command = link("Profile", "friends", "link_name", false);
    command.link_to("Person", "id");
    assert_eq!(
        command.raw(),
        "CREATE LINK link_name FROM Profile.friends TO Person.id"
    );

    let mut command = link("Profile", "friends", "link_name", true);
    command.link_to("Person", "id");
    assert_eq!(
        command.raw(),
        "CREATE LINK link_name FROM Profile.friends TO Person.id INVERSE"
    );
}

// ==================== Index Tests ====================

#[test]
fn test_index_create_and_drop() {
    assert_eq!(
        index_create("name", Some("Profile"), Some("unique")).raw(),
        "CREATE INDEX Profile.name unique"
    );
    assert_eq!(index_create("name", None, None).raw(), "CREATE INDEX name");
    assert_eq!(index_drop("name", Some("Profile")).raw(), "DROP INDEX Profile.name");
    assert_eq!(index_drop("name", None).raw(), "DROP INDEX name");
}

#[test]
fn test_index_count() {
    assert_eq!(
        index_count("dictionary").raw(),
        "SELECT count(*) AS size FROM index:dictionary"
    );
}

#[test]
fn test_index_put() {
    assert_eq!(
        index_put("dictionary", "luke", "12:0").raw(),
        r#"INSERT INTO index:dictionary (key,rid) values ("luke", #12:0)"#
    );
    assert_eq!(
        index_put("dictionary", r#"lu"ke"#, Value::rid("#12:0")).raw(),
        r#"INSERT INTO index:dictionary (key,rid) values ("luke", #12:0)"#
    );
}

#[test]
fn test_index_remove() {
    assert_eq!(
        index_remove("dictionary", "luke", None).raw(),
        r#"DELETE FROM index:dictionary WHERE key = "luke""#
    );
    assert_eq!(
        index_remove("dictionary", "luke", Some(Value::from("12:0"))).raw(),
        r#"DELETE FROM index:dictionary WHERE key = "luke" AND rid = #12:0"#
    );
}

#[test]
fn test_index_lookup() {
    let mut lookup = index_lookup("dictionary");
    assert_eq!(lookup.raw(), "SELECT FROM index:dictionary");

    lookup.where_("key = ?", "luke");
    assert_eq!(lookup.raw(), r#"SELECT FROM index:dictionary WHERE key = "luke""#);
}

#[test]
fn test_index_lookup_tokens() {
    let lookup = index_lookup("dictionary");
    assert!(lookup.token(WHERE).is_empty());
    assert_eq!(
        serde_json::to_value(lookup.tokens()).unwrap(),
        json!({ ":Index": ["dictionary"], ":Where": [] })
    );
}
