//! Merging docstring metadata with signature metadata.

use crate::docstring::ParsedDocstring;
use crate::schema::ParameterInfo;
use crate::signature::FunctionSignature;

/// Property name of the synthetic return-value parameter.
pub const RETURN_PARAMETER: &str = "return";

/// Builds one [`ParameterInfo`] per signature parameter, in signature order.
///
/// Descriptions and docstring types are looked up by exact name. Signature
/// parameters the docstring does not mention get an empty description;
/// docstring entries with no matching parameter are dropped.
pub fn reconcile(signature: &FunctionSignature, docstring: &ParsedDocstring) -> Vec<ParameterInfo> {
    for name in docstring.parameters.keys() {
        if !signature.params.iter().any(|param| &param.name == name) {
            tracing::debug!(
                function = %signature.name,
                parameter = %name,
                "docstring documents unknown parameter, ignoring"
            );
        }
    }

    signature
        .params
        .iter()
        .map(|param| {
            let documented = docstring.parameters.get(&param.name);
            ParameterInfo {
                name: param.name.clone(),
                declared_type: param.declared_type.clone(),
                docstring_type: documented.and_then(|doc| doc.type_token.clone()),
                description: documented
                    .map(|doc| doc.description.clone())
                    .unwrap_or_default(),
                has_default: param.has_default,
            }
        })
        .collect()
}

/// Builds the `"return"` pseudo-parameter from the documented return value.
///
/// Returns `None` when the docstring documents no return value, whatever the
/// signature declares. The declared return type wins over the docstring's.
pub fn reconcile_return(
    signature: &FunctionSignature,
    docstring: &ParsedDocstring,
) -> Option<ParameterInfo> {
    let documented = docstring.returns.as_ref()?;
    Some(ParameterInfo {
        declared_type: signature.return_type.clone(),
        docstring_type: documented.type_token.clone(),
        description: documented.description.clone(),
        ..ParameterInfo::new(RETURN_PARAMETER)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docstring::parse_docstring;
    use crate::signature::ParamSignature;
    use crate::types::TypeToken;

    fn parsed(text: &str) -> ParsedDocstring {
        parse_docstring("f", Some(text), None).unwrap()
    }

    #[test]
    fn follows_signature_order_and_defaults() {
        let docstring = parsed("Short.\n\n:param b: Second.\n:param a: First.\n:param ghost: Gone.");
        let signature = FunctionSignature::new("f")
            .param(ParamSignature::required("a"))
            .param(ParamSignature::optional("b"))
            .param(ParamSignature::required("c"));

        let params = reconcile(&signature, &docstring);
        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(params[0].description, "First.");
        assert!(!params[0].has_default);
        assert_eq!(params[1].description, "Second.");
        assert!(params[1].has_default);
        assert_eq!(params[2].description, "");
    }

    #[test]
    fn keeps_both_type_sources() {
        let docstring = parsed("Short.\n\n:param x: Value.\n:type x: str");
        let signature = FunctionSignature::new("f")
            .param(ParamSignature::required("x").with_type(TypeToken::named("int")));

        let params = reconcile(&signature, &docstring);
        assert_eq!(params[0].declared_type, Some(TypeToken::named("int")));
        assert_eq!(params[0].docstring_type, Some(TypeToken::named("str")));
    }

    #[test]
    fn optional_wording_does_not_change_defaults() {
        let docstring = parsed("Short.\n\nArgs:\n    x (int, optional): Value.");
        let signature = FunctionSignature::new("f").param(ParamSignature::required("x"));
        assert!(reconcile(&signature, &docstring)[0].is_required());
    }

    #[test]
    fn return_parameter_needs_documentation() {
        let signature = FunctionSignature::new("f").returns(TypeToken::named("bool"));
        assert_eq!(reconcile_return(&signature, &parsed("Short.")), None);

        let docstring = parsed("Short.\n\n:return: Flag.\n:rtype: int");
        let ret = reconcile_return(&signature, &docstring).unwrap();
        assert_eq!(ret.name, RETURN_PARAMETER);
        assert_eq!(ret.description, "Flag.");
        assert_eq!(ret.resolved_type(), Some(&TypeToken::named("bool")));
        assert!(ret.is_required());
    }
}
