#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use class_differ::class::scanner::body_extractor::extract_class_bodies;
    use class_differ::class::scanner::comments::strip_comments;
    use class_differ::{parse, Modifier};

    const ZOO: &str = r#"
        // Animals of the zoo
        public class Animal {
            protected String name;
            private int age;

            public Animal(String name) {
                this.name = name;
            }

            /* accessors */
            public String getName() {
                return name;
            }

            public void setAge(final int age, boolean validate) {
                if (validate) {
                    check(age);
                }
                this.age = age;
            }
        }

        class Dog extends Animal {
            private boolean goodBoy;

            void bark() { }
        }
    "#;

    #[test]
    fn parses_classes_fields_and_methods() {
        let outcome = parse(ZOO);

        // Verify the results
        assert!(outcome.errors.is_empty(), "Unexpected errors: {:?}", outcome.errors);
        assert_eq!(outcome.classes.len(), 2, "Should have found 2 classes");

        let animal = &outcome.classes[0];
        assert_eq!(animal.name, "Animal");
        assert_eq!(animal.extends, None, "Animal should have no parent");

        let fields: Vec<(Modifier, &str, &str)> = animal
            .attributes
            .iter()
            .map(|a| (a.modifier, a.type_name.as_str(), a.name.as_str()))
            .collect();
        assert_eq!(
            fields,
            vec![
                (Modifier::Protected, "String", "name"),
                (Modifier::Private, "int", "age"),
            ]
        );

        let methods: Vec<&str> = animal.methods.iter().map(|m| m.method_name.as_str()).collect();
        assert_eq!(methods, vec!["getName", "setAge"], "Constructor must not be listed");

        let set_age = &animal.methods[1];
        assert_eq!(set_age.modifier, Modifier::Public);
        assert_eq!(set_age.return_type, "void");
        let params: Vec<(&str, &str)> = set_age
            .parameters
            .iter()
            .map(|p| (p.type_name.as_str(), p.name.as_str()))
            .collect();
        assert_eq!(params, vec![("int", "age"), ("boolean", "validate")]);

        let dog = &outcome.classes[1];
        assert_eq!(dog.extends.as_deref(), Some("Animal"), "Dog should inherit from Animal");
        assert_eq!(dog.attributes.len(), 1);
        assert_eq!(dog.methods[0].modifier, Modifier::Default);
    }

    #[test]
    fn comments_hide_declarations() {
        let source = "class A {\n  // int hidden;\n  /* private String gone; */\n  int kept;\n}";
        let outcome = parse(source);

        let names: Vec<&str> = outcome.classes[0].attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["kept"]);
    }

    #[test]
    fn stripping_keeps_line_count() {
        let stripped = strip_comments(ZOO);
        assert_eq!(stripped.lines().count(), ZOO.lines().count());
        assert_eq!(strip_comments(&stripped), stripped);
    }

    #[test_case(1)]
    #[test_case(3)]
    #[test_case(8)]
    fn n_balanced_classes_give_n_bodies(n: usize) {
        let source: String = (0..n)
            .map(|i| format!("class K{i} {{ void f() {{ if (x) {{ }} }} }}\n"))
            .collect();
        let names: Vec<String> = extract_class_bodies(&source)
            .into_iter()
            .map(|r| r.map(|b| b.name))
            .collect::<Result<_, _>>()
            .unwrap();

        let expected: Vec<String> = (0..n).map(|i| format!("K{i}")).collect();
        assert_eq!(names, expected);
    }

    #[test_case("" ; "empty input")]
    #[test_case("   \n\t" ; "whitespace only")]
    #[test_case("interface Shape { double area(); }" ; "interface only")]
    #[test_case("// class Foo { }" ; "commented out class")]
    fn units_without_classes_are_advisory(source: &str) {
        let outcome = parse(source);
        assert!(outcome.classes.is_empty());
        assert_eq!(outcome.errors, vec!["no class declarations found".to_string()]);
    }

    #[test]
    fn unbalanced_class_is_reported_and_others_survive() {
        let outcome = parse("class First { int a; }\nclass Second { void f() { }\n");

        assert_eq!(outcome.classes.len(), 1);
        assert_eq!(outcome.classes[0].name, "First");
        assert_eq!(
            outcome.errors,
            vec!["unbalanced braces in class 'Second': body never closes".to_string()]
        );
    }

    #[test]
    fn malformed_members_are_skipped_silently() {
        let outcome = parse("class A { int; void f(int, String s) { } }");

        assert!(outcome.errors.is_empty());
        assert!(outcome.classes[0].attributes.is_empty());
        let params: Vec<&str> = outcome.classes[0].methods[0]
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(params, vec!["s"]);
    }

    #[test]
    fn odd_input_never_panics() {
        let inputs = [
            "class",
            "class A",
            "class A extends",
            "class A extends B",
            "}}}} class A { }",
            "class A { ( ( ( }",
            "class A { void f( { }",
            "class É { int ü; }",
        ];

        for input in inputs {
            let _ = parse(input);
        }
    }
}
