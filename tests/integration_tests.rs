use std::collections::BTreeMap;

#[cfg(test)]
mod classifier_tests {
    use super::*;
    use tcl_debugger::classifier::{classify, Kind};

    #[test]
    fn test_classify_is_deterministic() {
        for value in ["", "42", "3.14", "a b c", "a b c d", "{x}", "hello"] {
            assert_eq!(
                classify(value),
                classify(value),
                "classify must be pure for {:?}",
                value
            );
        }
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(classify(""), Kind::Empty);
    }

    #[test]
    fn test_numeric_values() {
        assert_eq!(classify("42"), Kind::Integer(42), "plain integer");
        assert_eq!(classify("-7"), Kind::Integer(-7), "negative integer");
        assert_eq!(classify("3.14"), Kind::Float(3.14), "decimal point means float");
        assert_eq!(classify("0.5"), Kind::Float(0.5));
    }

    #[test]
    fn test_numeric_strictness() {
        // Partial parses must not classify as numeric
        assert_eq!(classify("42abc"), Kind::Str("42abc".to_string()));
        // No silent trimming: surrounding whitespace disqualifies
        assert_eq!(classify(" 42"), Kind::Str(" 42".to_string()));
        assert_eq!(classify("42 "), Kind::Str("42 ".to_string()));
    }

    #[test]
    fn test_mapping_before_list_precedence() {
        let mut expected = BTreeMap::new();
        expected.insert("a".to_string(), "b".to_string());
        expected.insert("c".to_string(), "d".to_string());
        assert_eq!(
            classify("a b c d"),
            Kind::Dict(expected),
            "even token count within bounds is a dictionary"
        );

        assert_eq!(
            classify("a b c"),
            Kind::List(vec!["a".to_string(), "b".to_string(), "c".to_string()]),
            "odd token count above 1 is a list"
        );
    }

    #[test]
    fn test_brace_wrapped_single_token_is_string() {
        assert_eq!(classify("{x}"), Kind::Str("{x}".to_string()));
    }

    #[test]
    fn test_brace_stripping_for_composites() {
        assert_eq!(
            classify("{apple banana cherry}"),
            Kind::List(vec![
                "apple".to_string(),
                "banana".to_string(),
                "cherry".to_string()
            ])
        );

        let mut expected = BTreeMap::new();
        expected.insert("host".to_string(), "localhost".to_string());
        expected.insert("port".to_string(), "8080".to_string());
        assert_eq!(classify("{host localhost port 8080}"), Kind::Dict(expected));
    }

    #[test]
    fn test_duplicate_dict_keys_overwrite() {
        let Kind::Dict(pairs) = classify("k 1 k 2") else {
            panic!("expected a dictionary");
        };
        assert_eq!(pairs.len(), 1, "duplicate keys collapse");
        assert_eq!(pairs.get("k"), Some(&"2".to_string()), "later key wins");
    }

    #[test]
    fn test_long_even_sequence_is_list_not_dict() {
        // 22 tokens: even, but past the dictionary bound of 20
        let value = (0..22).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        match classify(&value) {
            Kind::List(elements) => assert_eq!(elements.len(), 22),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_braces_are_string() {
        assert_eq!(classify("{}"), Kind::Str("{}".to_string()));
    }

    #[test]
    fn test_kind_display_helpers() {
        assert_eq!(classify("42").name(), "integer");
        assert_eq!(classify("42").icon(), "[INT]");
        assert_eq!(classify("a b c").detailed(), "list (3 elements)");
        assert_eq!(classify("a b c d").detailed(), "dictionary (2 pairs)");
        assert!(classify("3.14").is_numeric());
        assert!(!classify("hello").is_numeric());
    }
}

#[cfg(test)]
mod store_tests {
    use tcl_debugger::classifier::Kind;
    use tcl_debugger::tracker::{VariableStore, HISTORY_CAPACITY};

    #[test]
    fn test_creation_write() {
        let mut store = VariableStore::new();
        let event = store
            .write("counter", "42", "global", 10)
            .expect("global write must be stored");
        assert!(event.created);
        assert_eq!(event.old_value, "");
        assert_eq!(event.new_value, "42");

        let record = store.resolve("counter").expect("record should exist");
        assert_eq!(record.value, "42");
        assert_eq!(record.previous_value, "", "previous empty until first mutation");
        assert!(record.history.is_empty(), "no history entry on creation");
        assert_eq!(record.mutation_count, 1);
        assert_eq!(record.kind, Kind::Integer(42));
    }

    #[test]
    fn test_update_shifts_previous_and_reclassifies() {
        let mut store = VariableStore::new();
        store.write("x", "42", "global", 1);
        let event = store.write("x", "a b c", "global", 2).unwrap();
        assert!(!event.created);
        assert_eq!(event.old_value, "42");

        let record = store.resolve("x").unwrap();
        assert_eq!(record.previous_value, "42");
        assert_eq!(record.value, "a b c");
        assert_eq!(record.mutation_count, 2);
        assert!(
            matches!(record.kind, Kind::List(_)),
            "kind must be recomputed on every write"
        );
    }

    #[test]
    fn test_history_bounded_to_ten_most_recent() {
        let mut store = VariableStore::new();
        for i in 0..15 {
            store.write("x", &format!("v{}", i), "global", i);
        }

        let record = store.resolve("x").unwrap();
        assert_eq!(record.history.len(), HISTORY_CAPACITY);

        // Superseded values v4..v13, oldest evicted first
        let expected: Vec<String> = (4..14).map(|i| format!("v{}", i)).collect();
        let actual: Vec<String> = record.history.iter().cloned().collect();
        assert_eq!(actual, expected, "history keeps the 10 most recent in order");
    }

    #[test]
    fn test_noop_rewrite_history_rule() {
        let mut store = VariableStore::new();
        store.write("x", "1", "global", 1);
        store.write("x", "1", "global", 2);
        assert!(
            store.resolve("x").unwrap().history.is_empty(),
            "no-op rewrite before any change tracks nothing"
        );

        store.write("x", "2", "global", 3);
        store.write("x", "2", "global", 4);
        let record = store.resolve("x").unwrap();
        assert_eq!(
            record.history.iter().cloned().collect::<Vec<_>>(),
            vec!["1".to_string(), "2".to_string()],
            "once history has begun, even a no-op rewrite extends it"
        );
        assert_eq!(record.mutation_count, 4, "every write counts");
    }

    #[test]
    fn test_local_shadows_global() {
        let mut store = VariableStore::new();
        store.write("x", "global-value", "global", 1);

        store.push_scope();
        store.write("x", "local-value", "local", 2);

        let record = store.resolve("x").expect("x should resolve");
        assert_eq!(record.value, "local-value", "local record shadows global");
        assert_eq!(record.scope, "local");

        store.pop_scope();
        let record = store.resolve("x").expect("global x should survive the pop");
        assert_eq!(record.value, "global-value");
        assert_eq!(record.scope, "global");
    }

    #[test]
    fn test_pop_on_empty_stack_is_noop() {
        let mut store = VariableStore::new();
        store.write("keep", "1", "global", 1);
        store.pop_scope();
        assert_eq!(store.depth(), 0);
        assert_eq!(store.resolve("keep").unwrap().value, "1");
    }

    #[test]
    fn test_local_write_dropped_without_frame() {
        let mut store = VariableStore::new();
        let event = store.write("y", "1", "local", 1);
        assert!(event.is_none(), "dropped write produces no event");
        assert!(store.resolve("y").is_none(), "no record created");
    }

    #[test]
    fn test_global_write_updates_local_shadow_first() {
        let mut store = VariableStore::new();
        store.write("x", "1", "global", 1);
        store.push_scope();
        store.write("x", "2", "local", 2);

        // Resolution is local-first, so a further write lands on the shadow
        store.write("x", "3", "global", 3);
        assert_eq!(store.resolve("x").unwrap().value, "3");

        store.pop_scope();
        assert_eq!(
            store.resolve("x").unwrap().value,
            "1",
            "the underlying global was never touched"
        );
    }

    #[test]
    fn test_list_all_snapshot() {
        let mut store = VariableStore::new();
        store.write("g1", "1", "global", 1);
        store.write("g2", "2", "global", 2);
        store.push_scope();
        store.write("l1", "3", "local", 3);

        let (locals, globals) = store.list_all();
        assert_eq!(locals.len(), 1);
        assert_eq!(globals.len(), 2);
        assert_eq!(locals[0].name, "l1");
        assert_eq!(store.iter_all().count(), 3);
    }
}

#[cfg(test)]
mod watch_tests {
    use tcl_debugger::tracker::VariableStore;
    use tcl_debugger::watch::{TriggerCondition, WatchRegistry};

    #[test]
    fn test_equality_trigger_fires_exactly_on_match() {
        let mut store = VariableStore::new();
        let mut registry = WatchRegistry::new();
        registry.add_trigger("counter", "=100");

        let event = store.write("counter", "99", "global", 1).unwrap();
        assert!(
            !registry.on_variable_changed(&event),
            "99 does not satisfy =100"
        );

        let event = store.write("counter", "100", "global", 2).unwrap();
        assert!(registry.on_variable_changed(&event), "100 satisfies =100");
    }

    #[test]
    fn test_changed_and_empty_conditions_are_equivalent() {
        let mut store = VariableStore::new();
        let mut registry = WatchRegistry::new();
        registry.add_trigger("a", "changed");
        registry.add_trigger("b", "");

        let event = store.write("a", "1", "global", 1).unwrap();
        assert!(registry.on_variable_changed(&event), "creation changes '' -> '1'");
        let event = store.write("a", "1", "global", 2).unwrap();
        assert!(!registry.on_variable_changed(&event), "no-op write fires nothing");

        let event = store.write("b", "x", "global", 3).unwrap();
        assert!(registry.on_variable_changed(&event));
    }

    #[test]
    fn test_unrecognized_condition_is_inert() {
        let mut store = VariableStore::new();
        let mut registry = WatchRegistry::new();
        registry.add_trigger("x", ">50");

        let event = store.write("x", "99", "global", 1).unwrap();
        assert!(
            !registry.on_variable_changed(&event),
            "unknown condition text never fires"
        );
        assert_eq!(
            registry.triggers()[0].hit_count,
            1,
            "but it is still evaluated"
        );
    }

    #[test]
    fn test_multiple_triggers_evaluated_independently() {
        let mut store = VariableStore::new();
        let mut registry = WatchRegistry::new();
        registry.add_trigger("x", "=5");
        registry.add_trigger("x", "=7");
        registry.add_trigger("other", "changed");

        let event = store.write("x", "7", "global", 1).unwrap();
        assert!(registry.on_variable_changed(&event), "second trigger fires");
        assert_eq!(registry.triggers()[0].hit_count, 1);
        assert_eq!(registry.triggers()[1].hit_count, 1);
        assert_eq!(
            registry.triggers()[2].hit_count,
            0,
            "triggers for other names are not consulted"
        );
    }

    #[test]
    fn test_condition_parsing() {
        assert_eq!(TriggerCondition::parse(""), TriggerCondition::AnyChange);
        assert_eq!(TriggerCondition::parse("changed"), TriggerCondition::AnyChange);
        assert_eq!(
            TriggerCondition::parse("=100"),
            TriggerCondition::Equals("100".to_string())
        );
        assert_eq!(
            TriggerCondition::parse("whenever"),
            TriggerCondition::Inert("whenever".to_string())
        );
    }

    #[test]
    fn test_watch_list_membership() {
        let mut registry = WatchRegistry::new();
        registry.add_watch("a");
        registry.add_watch("a");
        assert_eq!(registry.watches().len(), 2, "duplicates are permitted");

        assert!(registry.remove_watch("a"), "removes first occurrence");
        assert_eq!(registry.watches().len(), 1);
        assert!(!registry.remove_watch("missing"), "absent name is a no-op");
        assert!(registry.is_watched("a"));
    }
}

#[cfg(test)]
mod render_tests {
    use tcl_debugger::render::print_variables;
    use tcl_debugger::tracker::VariableStore;
    use tcl_debugger::watch::WatchRegistry;

    #[test]
    fn test_vars_listing_survives_long_multibyte_value() {
        let mut store = VariableStore::new();
        let registry = WatchRegistry::new();

        // Long enough to be shortened for display, with multibyte
        // chars straddling the cut point
        store.write("accented", &"é".repeat(13), "global", 1);
        store.write("mixed", "naïve café naïve café résumé", "global", 2);

        print_variables(&store, &registry);
    }
}

#[cfg(test)]
mod breakpoint_tests {
    use tcl_debugger::debugger::Breakpoints;

    #[test]
    fn test_add_remove_and_should_stop() {
        let mut bps = Breakpoints::new();
        bps.add(5);
        bps.add(10);

        assert!(bps.should_stop(5));
        assert!(bps.should_stop(10));
        assert!(!bps.should_stop(7));

        assert!(bps.remove(5));
        assert!(!bps.remove(5), "second remove reports absence");
        assert!(!bps.should_stop(5));
        assert_eq!(bps.len(), 1);
    }

    #[test]
    fn test_toggle_and_hit_counts() {
        let mut bps = Breakpoints::new();
        bps.add(3);

        assert_eq!(bps.toggle(3), Some(false), "toggle disables");
        assert!(!bps.should_stop(3), "disabled breakpoints do not stop");
        assert_eq!(bps.toggle(3), Some(true));
        assert_eq!(bps.toggle(99), None, "unknown line");

        bps.hit(3);
        bps.hit(3);
        let bp = bps.iter().next().unwrap();
        assert_eq!(bp.hit_count, 2);

        bps.clear();
        assert!(bps.is_empty());
    }
}
