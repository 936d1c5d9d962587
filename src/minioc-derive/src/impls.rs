use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{quote, ToTokens};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::token::Comma;
use syn::visit_mut::{self, VisitMut};
use syn::{
    Attribute, Error as SynError, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, Meta,
    Result as SynResult, ReturnType, Signature, Type, TypePath,
};

use crate::attrs::AttributeData;

#[derive(Debug)]
struct ConstructorData {
    self_type: TypePath,
    identifier: Ident,
    arguments: Vec<ArgumentData>,
}

#[derive(Debug)]
struct ArgumentData {
    span: Span,
}

struct AttributeRemovalVisitor;

impl AttributeRemovalVisitor {
    fn is_custom_attribute(attr: &Attribute) -> bool {
        if let Meta::Path(path) = &attr.meta {
            path.segments.first().is_some_and(|s| s.ident == "inject")
        } else {
            false
        }
    }
}

impl VisitMut for AttributeRemovalVisitor {
    fn visit_attributes_mut(&mut self, attrs: &mut Vec<Attribute>) {
        attrs.retain(|attr| !Self::is_custom_attribute(attr));
        attrs
            .iter_mut()
            .for_each(|attr| visit_mut::visit_attribute_mut(self, attr));
    }
}

pub fn expand_implementation(
    impls: TokenStream,
    attr_data: AttributeData,
) -> SynResult<TokenStream2> {
    let mut impls = match syn::parse::<ItemImpl>(impls) {
        Ok(impls) => impls,
        Err(err) => {
            return Err(SynError::new(
                err.span(),
                "`#[component]` should be annotated on the `impl` block",
            ))
        }
    };

    let self_type = get_self_type(&impls)?;
    let signature = get_constructor_signature(&impls.items, impls.span())?;
    let ctor_data = parse_constructor(self_type, signature)?;

    let component = expand_component_implementation(&ctor_data);
    let upcasts = expand_upcast_implementations(&ctor_data, &attr_data);

    let mut visitor = AttributeRemovalVisitor;
    visitor.visit_item_impl_mut(&mut impls);

    Ok(quote! {
        #impls
        #component
        #upcasts
    })
}

fn get_self_type(impls: &ItemImpl) -> SynResult<TypePath> {
    if !impls.generics.params.is_empty() {
        return Err(SynError::new(
            impls.generics.span(),
            "`#[component]` doesn't support generic `impl` blocks",
        ));
    }
    if let Type::Path(ty) = impls.self_ty.as_ref() {
        Ok(ty.clone())
    } else {
        Err(SynError::new(impls.self_ty.span(), "invalid self type"))
    }
}

fn get_constructor_signature(items: &[ImplItem], impl_span: Span) -> SynResult<Signature> {
    let ctors: Vec<_> = items
        .iter()
        .filter_map(filter_and_map_item_fn)
        .filter(is_annotated_with_inject)
        .collect();

    let signature = if ctors.len() > 1 {
        return Err(SynError::new(
            impl_span,
            "only one associated function can be annotated with `#[inject]`",
        ));
    } else if let Some(&ctor) = ctors.first() {
        ctor.sig.clone()
    } else {
        return Err(SynError::new(
            impl_span,
            "no associated function is annotated with `#[inject]`",
        ));
    };

    if let Some(FnArg::Receiver(rec)) = signature.inputs.first() {
        return Err(SynError::new(
            rec.span(),
            "method is not allowed to be annotated with `#[inject]`",
        ));
    }

    Ok(signature)
}

fn filter_and_map_item_fn(item: &ImplItem) -> Option<&ImplItemFn> {
    if let ImplItem::Fn(impl_fn) = item {
        Some(impl_fn)
    } else {
        None
    }
}

fn is_annotated_with_inject(item_fn: &&ImplItemFn) -> bool {
    item_fn.attrs.iter().any(|attr| {
        let content = attr.meta.to_token_stream().to_string();
        &content == "inject"
    })
}

fn parse_constructor(self_type: TypePath, signature: Signature) -> SynResult<ConstructorData> {
    let identifier = signature.ident;
    let arguments = parse_constructor_arguments(signature.inputs)?;
    check_constructor_return_type(signature.output, &self_type)?;

    Ok(ConstructorData {
        self_type,
        identifier,
        arguments,
    })
}

fn parse_constructor_arguments(inputs: Punctuated<FnArg, Comma>) -> SynResult<Vec<ArgumentData>> {
    inputs
        .into_iter()
        .map(|arg| {
            let FnArg::Typed(arg) = arg else {
                unreachable!("a constructor should not have a receiver argument");
            };
            if is_shared_handle(&arg.ty) {
                Ok(ArgumentData { span: arg.span() })
            } else {
                Err(SynError::new(
                    arg.ty.span(),
                    "a constructor's parameters should be shared handles like `Arc<T>`",
                ))
            }
        })
        .collect()
}

fn is_shared_handle(ty: &Type) -> bool {
    let Type::Path(ty) = ty else {
        return false;
    };
    ty.path
        .segments
        .last()
        .is_some_and(|s| s.ident == "Arc" && !s.arguments.is_empty())
}

fn check_constructor_return_type(output: ReturnType, self_type: &TypePath) -> SynResult<()> {
    let ReturnType::Type(_, return_type) = output else {
        return Err(SynError::new(
            output.span(),
            "a constructor's return type should be `Self`",
        ));
    };
    let Type::Path(return_type) = *return_type else {
        return Err(SynError::new(
            return_type.span(),
            "a constructor's return type should be `Self`",
        ));
    };

    let segments = &return_type.path.segments;

    if &return_type == self_type || (segments.len() == 1 && segments[0].ident == "Self") {
        Ok(())
    } else {
        Err(SynError::new(
            return_type.span(),
            "a constructor's return type should be `Self`",
        ))
    }
}

fn expand_component_implementation(ctor_data: &ConstructorData) -> TokenStream2 {
    let self_type = &ctor_data.self_type;
    let constructor = &ctor_data.identifier;

    let deps: Vec<_> = ctor_data
        .arguments
        .iter()
        .enumerate()
        .map(|(i, arg)| Ident::new(&format!("dep{i}"), arg.span))
        .collect();

    quote! {
        impl ::minioc::provider::component::Component for #self_type {
            fn construct<I>(injector: &I) -> ::std::result::Result<
                Self,
                ::minioc::container::injector::InjectorError
            >
            where
                I: ::minioc::container::injector::TypedInjector + ?Sized
            {
                #(
                    let #deps = ::minioc::container::injector::TypedInjector::get(injector)?;
                )*
                ::std::result::Result::Ok(<#self_type>::#constructor(#(#deps,)*))
            }
        }
    }
}

fn expand_upcast_implementations(
    ctor_data: &ConstructorData,
    attr_data: &AttributeData,
) -> TokenStream2 {
    let self_type = &ctor_data.self_type;

    attr_data
        .interfaces
        .iter()
        .map(|interface| {
            quote! {
                impl ::minioc::provider::component::Upcast<#interface> for #self_type {
                    fn upcast(this: ::std::sync::Arc<Self>) -> ::std::sync::Arc<#interface> {
                        this
                    }
                }
            }
        })
        .collect()
}
