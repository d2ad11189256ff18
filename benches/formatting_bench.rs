use analyzer_fixtures::testkit::{basic_context, csharp_context};
use analyzer_fixtures::{build, format_document, AnalyzerTestContext};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn create_csharp_source(classes: usize) -> String {
    let mut content = String::from("using System;\nnamespace Bench{");
    for i in 0..classes {
        content.push_str(&format!(
            "class C{i}{{public int P{{get;set;}}int[] values=new[]{{1,2,3}};\
             void M(int a,int b){{for(int k=0;k<a;k++){{if(a==b){{return;}}\
             switch(k){{case 0:b+=k;break;default:b-=k;break;}}}}}}}}"
        ));
    }
    content.push('}');
    content
}

fn create_basic_source(modules: usize) -> String {
    let mut content = String::new();
    for i in 0..modules {
        content.push_str(&format!(
            "Module M{i}\nSub Run(ByVal x As Integer)\nFor k = 1 To x\nIf k=x Then\n\
             Console.WriteLine( k )\nElse\nReturn\nEnd If\nNext\nSelect Case x\nCase 1\n\
             x = 2\nEnd Select\nEnd Sub\nEnd Module\n"
        ));
    }
    content
}

fn benchmark_format(c: &mut Criterion, name: &str, contexts: &[(usize, AnalyzerTestContext)]) {
    let mut group = c.benchmark_group(name);
    for (size, context) in contexts {
        group.bench_with_input(BenchmarkId::from_parameter(size), context, |b, context| {
            // A fresh document each iteration so parsing is measured too.
            b.iter(|| format_document(&build(black_box(context))));
        });
    }
    group.finish();
}

fn benchmark_csharp_formatting(c: &mut Criterion) {
    let contexts: Vec<_> = [1, 10, 100]
        .into_iter()
        .map(|size| (size, csharp_context(&create_csharp_source(size))))
        .collect();
    benchmark_format(c, "format_csharp", &contexts);
}

fn benchmark_basic_formatting(c: &mut Criterion) {
    let contexts: Vec<_> = [1, 10, 100]
        .into_iter()
        .map(|size| (size, basic_context(&create_basic_source(size))))
        .collect();
    benchmark_format(c, "format_basic", &contexts);
}

fn benchmark_compilation(c: &mut Criterion) {
    let context = csharp_context(&create_csharp_source(50));
    c.bench_function("compile_csharp_50", |b| {
        b.iter(|| build(black_box(&context)).compilation().diagnostics().len());
    });
}

criterion_group!(
    benches,
    benchmark_csharp_formatting,
    benchmark_basic_formatting,
    benchmark_compilation
);
criterion_main!(benches);
